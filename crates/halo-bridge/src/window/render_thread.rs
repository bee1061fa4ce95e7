use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};

type Job<T> = Box<dyn FnOnce(&mut T) + Send>;

enum Command<T> {
    Run(Job<T>),
    Stop,
}

/// Dedicated thread owning state `T` (typically a [`crate::Bridge`]).
///
/// Jobs run one at a time in submission order, each with exclusive access to
/// the state. Nothing else ever touches `T`, which keeps every device and
/// runtime call on a single thread.
pub struct RenderThread<T: Send + 'static> {
    commands: mpsc::Sender<Command<T>>,
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> RenderThread<T> {
    pub const NAME: &'static str = "RenderThread";

    /// Moves `state` onto a new render thread.
    pub fn start(state: T) -> Result<Self> {
        let (commands, inbox) = mpsc::channel::<Command<T>>();

        let handle = thread::Builder::new()
            .name(Self::NAME.to_string())
            .spawn(move || {
                let mut state = state;
                for command in inbox {
                    match command {
                        Command::Run(job) => job(&mut state),
                        Command::Stop => break,
                    }
                }
                state
            })
            .context("failed to spawn render thread")?;

        log::debug!("render thread started");

        Ok(Self {
            commands,
            handle: Some(handle),
        })
    }

    /// Queues `job`. Returns `false` if the thread is no longer running.
    pub fn perform<F>(&self, job: F) -> bool
    where
        F: FnOnce(&mut T) + Send + 'static,
    {
        self.commands.send(Command::Run(Box::new(job))).is_ok()
    }

    /// Runs the queued jobs, stops the thread and hands the state back.
    ///
    /// Returns `None` if a job panicked.
    pub fn stop(mut self) -> Option<T> {
        self.join()
    }

    fn join(&mut self) -> Option<T> {
        let handle = self.handle.take()?;
        let _ = self.commands.send(Command::Stop);
        match handle.join() {
            Ok(state) => Some(state),
            Err(_) => {
                log::error!("render thread panicked");
                None
            }
        }
    }
}

impl<T: Send + 'static> Drop for RenderThread<T> {
    fn drop(&mut self) {
        self.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jobs_run_in_order_on_the_named_thread() {
        let rt = RenderThread::start(Vec::<String>::new()).unwrap();
        for i in 0..3 {
            assert!(rt.perform(move |log| {
                let name = thread::current().name().unwrap_or_default().to_string();
                log.push(format!("{name}:{i}"));
            }));
        }

        let log = rt.stop().unwrap();
        assert_eq!(log, ["RenderThread:0", "RenderThread:1", "RenderThread:2"]);
    }

    #[test]
    fn panicking_job_loses_the_state() {
        let rt = RenderThread::start(0u32).unwrap();
        rt.perform(|_| panic!("device lost"));
        assert_eq!(rt.stop(), None);
    }

    #[test]
    fn drop_still_drains_queued_work() {
        let (tx, rx) = mpsc::channel();
        {
            let rt = RenderThread::start(()).unwrap();
            rt.perform(move |_| tx.send(42).unwrap());
        }
        assert_eq!(rx.recv().unwrap(), 42);
    }
}
