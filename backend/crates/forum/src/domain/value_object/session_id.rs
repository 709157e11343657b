use kernel::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionMarker;
pub type SessionId = Id<SessionMarker>;
