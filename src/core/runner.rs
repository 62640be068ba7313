use crate::core::Task;
use crate::utils::error::Result;
use std::time::Instant;

pub struct TaskRunner<T: Task> {
    task: T,
}

impl<T: Task> TaskRunner<T> {
    pub fn new(task: T) -> Self {
        Self { task }
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn run(&self) -> Result<T::Output> {
        let name = self.task.name();
        let started = Instant::now();
        tracing::info!("Starting {}", name);

        match self.task.run() {
            Ok(output) => {
                tracing::info!("{} finished in {:?}", name, started.elapsed());
                Ok(output)
            }
            Err(e) => {
                tracing::error!(
                    "{} failed after {:?}: {} (Category: {:?}, Severity: {:?})",
                    name,
                    started.elapsed(),
                    e,
                    e.category(),
                    e.severity()
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TaskError;
    use std::cell::Cell;

    struct CountingTask {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Task for CountingTask {
        type Output = usize;

        fn name(&self) -> &'static str {
            "counting"
        }

        fn run(&self) -> Result<usize> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(TaskError::ConfigError {
                    message: "boom".to_string(),
                });
            }
            Ok(42)
        }
    }

    #[test]
    fn test_runner_returns_task_output() {
        let runner = TaskRunner::new(CountingTask {
            calls: Cell::new(0),
            fail: false,
        });

        assert_eq!(runner.run().unwrap(), 42);
        assert_eq!(runner.task().calls.get(), 1);
    }

    #[test]
    fn test_runner_propagates_errors() {
        let runner = TaskRunner::new(CountingTask {
            calls: Cell::new(0),
            fail: true,
        });

        assert!(matches!(runner.run(), Err(TaskError::ConfigError { .. })));
    }
}
