use smol::channel::{self, Receiver, Sender, TryRecvError};
use thiserror::Error;

use holo_shared::{EntityId, ItemAppearance, Position, Text};

/// A change to a phantom entity requested from outside the simulation thread.
/// Applied at the start of the next tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Task {
    SetText { entity: EntityId, text: Text },
    SetAppearance {
        entity: EntityId,
        appearance: ItemAppearance,
    },
    MoveTo { entity: EntityId, position: Position },
    Destroy { entity: EntityId },
}

impl Task {
    pub fn entity(&self) -> EntityId {
        match self {
            Task::SetText { entity, .. }
            | Task::SetAppearance { entity, .. }
            | Task::MoveTo { entity, .. }
            | Task::Destroy { entity } => *entity,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("the phantom entity server has shut down")]
pub struct TaskQueueClosed;

/// Cloneable handle for background producers
#[derive(Clone)]
pub struct TaskSender {
    sender: Sender<Task>,
}

impl TaskSender {
    pub fn send(&self, task: Task) -> Result<(), TaskQueueClosed> {
        self.sender.try_send(task).map_err(|_| TaskQueueClosed)
    }

    pub fn set_text(&self, entity: EntityId, text: impl Into<Text>) -> Result<(), TaskQueueClosed> {
        self.send(Task::SetText {
            entity,
            text: text.into(),
        })
    }
}

pub(crate) struct TaskQueue {
    sender: Sender<Task>,
    receiver: Receiver<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        let (sender, receiver) = channel::unbounded();
        Self { sender, receiver }
    }

    pub fn sender(&self) -> TaskSender {
        TaskSender {
            sender: self.sender.clone(),
        }
    }

    /// Everything queued so far, in submission order
    pub fn drain(&self) -> Vec<Task> {
        let mut output = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(task) => output.push(task),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        output
    }

    /// Refuse further tasks. Already queued ones are discarded.
    pub fn close(&self) {
        self.receiver.close();
        while self.receiver.try_recv().is_ok() {}
    }
}
