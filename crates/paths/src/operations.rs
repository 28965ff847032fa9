//! # Operations
//!
//! Every backend operation the client can issue, with its HTTP method and
//! path shape. CRUD operations are generic over [`Resource`]; sub-actions are
//! resource-specific and always `POST`.

use std::fmt;

use crate::resource::Resource;

/// HTTP method of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a sub-action targets the collection or a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionScope {
    /// `collection/{action}/`
    Collection,
    /// `collection/{id}/{action}/`
    Item,
}

/// Resource-specific sub-actions (non-CRUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Batch creation of time slots on the server
    GenerateSlots,
    /// Transition one slot to the blocked state
    BlockSlot,
    /// Reverse the blocked state of one slot
    UnblockSlot,
    /// Apply a blocking overlay over a date/time interval
    BlockTimeRange,
    /// Remove a blocking overlay over a date/time interval
    UnblockTimeRange,
}

impl Action {
    /// Path segment appended after the collection (or item) path
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Action::GenerateSlots => "generate_slots",
            Action::BlockSlot => "block_slot",
            Action::UnblockSlot => "unblock_slot",
            Action::BlockTimeRange => "block_time_range",
            Action::UnblockTimeRange => "unblock_time_range",
        }
    }

    #[must_use]
    pub fn resource(self) -> Resource {
        match self {
            Action::GenerateSlots | Action::BlockSlot | Action::UnblockSlot => Resource::TimeSlots,
            Action::BlockTimeRange | Action::UnblockTimeRange => Resource::BlockedTimes,
        }
    }

    #[must_use]
    pub fn scope(self) -> ActionScope {
        match self {
            Action::BlockSlot | Action::UnblockSlot => ActionScope::Item,
            Action::GenerateSlots | Action::BlockTimeRange | Action::UnblockTimeRange => {
                ActionScope::Collection
            }
        }
    }
}

/// A single backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List(Resource),
    Get(Resource),
    Create(Resource),
    Update(Resource),
    Delete(Resource),
    Action(Action),
}

impl Operation {
    /// Every operation the backend exposes, in table order
    pub const ALL: [Operation; 11] = [
        Operation::List(Resource::Salons),
        Operation::Get(Resource::Salons),
        Operation::Create(Resource::Salons),
        Operation::Update(Resource::Salons),
        Operation::Delete(Resource::Salons),
        Operation::List(Resource::TimeSlots),
        Operation::Action(Action::GenerateSlots),
        Operation::Action(Action::BlockSlot),
        Operation::Action(Action::UnblockSlot),
        Operation::Action(Action::BlockTimeRange),
        Operation::Action(Action::UnblockTimeRange),
    ];

    #[must_use]
    pub fn resource(self) -> Resource {
        match self {
            Operation::List(r)
            | Operation::Get(r)
            | Operation::Create(r)
            | Operation::Update(r)
            | Operation::Delete(r) => r,
            Operation::Action(action) => action.resource(),
        }
    }

    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Operation::List(_) | Operation::Get(_) => Method::Get,
            Operation::Create(_) | Operation::Action(_) => Method::Post,
            Operation::Update(_) => Method::Put,
            Operation::Delete(_) => Method::Delete,
        }
    }

    /// Whether the path contains an `{id}` segment
    #[must_use]
    pub fn requires_id(self) -> bool {
        match self {
            Operation::List(_) | Operation::Create(_) => false,
            Operation::Get(_) | Operation::Update(_) | Operation::Delete(_) => true,
            Operation::Action(action) => action.scope() == ActionScope::Item,
        }
    }

    /// Path template with an `{id}` placeholder, usable as an Axum route
    #[must_use]
    pub fn route_template(self) -> String {
        let mut path = self.resource().base_path();
        if self.requires_id() {
            path.push_str("{id}/");
        }
        if let Operation::Action(action) = self {
            path.push_str(action.segment());
            path.push('/');
        }
        path
    }

    /// Stable name used for span fields and metric labels
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Operation::List(r) => format!("{r}.list"),
            Operation::Get(r) => format!("{r}.get"),
            Operation::Create(r) => format!("{r}.create"),
            Operation::Update(r) => format!("{r}.update"),
            Operation::Delete(r) => format!("{r}.delete"),
            Operation::Action(action) => format!("{}.{}", action.resource(), action.segment()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
