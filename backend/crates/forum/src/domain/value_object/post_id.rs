use kernel::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostMarker;
pub type PostId = Id<PostMarker>;
