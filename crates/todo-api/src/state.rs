use std::sync::Arc;

use todo_core::TodoManager;

#[derive(Clone)]
pub struct ApiState {
    pub manager: Arc<TodoManager>,
}

impl ApiState {
    pub fn new(manager: TodoManager) -> Self {
        Self {
            manager: Arc::new(manager),
        }
    }
}
