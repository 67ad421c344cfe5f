use crate::ShowroomError;
use crate::ShowroomEvent;

pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: ShowroomEvent) -> Result<(), ShowroomError>;

    fn event_history(&self, limit: Option<usize>) -> Result<Vec<ShowroomEvent>, ShowroomError>;

    fn clear_event_history(&self) -> Result<(), ShowroomError>;
}
