use kernel::id::Id;

pub struct TaskMarker;
pub type TaskId = Id<TaskMarker>;
