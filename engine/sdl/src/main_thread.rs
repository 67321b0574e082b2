//! Runs closures on the process's initial thread.
//!
//! Several platforms only deliver window and input events to the thread that
//! started the process. [`main`] parks that thread in a loop executing
//! closures sent by [`call`] while the program itself runs on a worker.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        Mutex, MutexGuard, PoisonError,
        mpsc::{self, Sender},
    },
    thread::{self, ThreadId},
};

use crate::{Error, Result};

type Job = Box<dyn FnOnce() + Send>;

enum Message {
    Run(Job),
    Exit,
}

struct Servicer {
    sender: Sender<Message>,
    thread: ThreadId,
}

static SERVICER: Mutex<Option<Servicer>> = Mutex::new(None);

fn servicer() -> MutexGuard<'static, Option<Servicer>> {
    SERVICER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Tells the servicing loop to stop once the worker is done, including when
/// it unwinds.
struct ExitOnDrop(Sender<Message>);

impl Drop for ExitOnDrop {
    fn drop(&mut self) {
        let _ = self.0.send(Message::Exit);
    }
}

/// Runs `f` on a new thread and services [`call`] requests on the current
/// thread until `f` returns. Must be called from the initial thread.
///
/// Panics in `f` are resumed on the calling thread.
pub fn main<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    let (sender, receiver) = mpsc::channel();

    {
        let mut servicer = servicer();
        assert!(servicer.is_none(), "main_thread::main is already running");
        *servicer = Some(Servicer {
            sender: sender.clone(),
            thread: thread::current().id(),
        });
    }
    log::debug!("servicing main thread calls on {:?}", thread::current().id());

    let result = thread::scope(|scope| {
        let worker = scope.spawn(move || {
            let _exit = ExitOnDrop(sender);
            f()
        });

        for message in receiver.iter() {
            match message {
                Message::Run(job) => job(),
                Message::Exit => break,
            }
        }

        worker.join()
    });

    *servicer() = None;
    log::debug!("main thread servicing stopped");

    // Anything queued after the worker exited is dropped along with the
    // receiver, which wakes its caller with an error.
    drop(receiver);

    match result {
        Ok(value) => value,
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// Runs `f` on the main thread and waits for its result.
///
/// Runs `f` directly when called from the main thread itself. Fails with
/// [`Error::MainThread`] when [`main`] is not running. A panic in `f` is
/// resumed on the calling thread.
pub fn call<F, R>(f: F) -> Result<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let sender = match servicer().as_ref() {
        None => return Err(Error::MainThread),
        Some(servicer) if servicer.thread == thread::current().id() => None,
        Some(servicer) => Some(servicer.sender.clone()),
    };
    let Some(sender) = sender else {
        return Ok(f());
    };

    let (reply, response) = mpsc::sync_channel(1);
    let job: Job = Box::new(move || {
        let _ = reply.send(panic::catch_unwind(AssertUnwindSafe(f)));
    });
    sender
        .send(Message::Run(job))
        .map_err(|_| Error::MainThread)?;

    match response.recv() {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(payload)) => panic::resume_unwind(payload),
        Err(_) => Err(Error::MainThread),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The trampoline is process global, so everything is exercised from a
    // single test.
    #[test]
    fn round_trip() {
        assert!(matches!(call(|| ()), Err(Error::MainThread)));

        let initial = thread::current().id();
        let value = main(move || {
            let worker = thread::current().id();
            assert_ne!(worker, initial);

            let serviced_on = call(|| thread::current().id()).unwrap();
            assert_eq!(serviced_on, initial);

            let nested = call(|| call(|| 6 * 7).unwrap()).unwrap();
            assert_eq!(nested, 42);

            let from_other = thread::spawn(|| call(|| thread::current().id()).unwrap())
                .join()
                .unwrap();
            assert_eq!(from_other, initial);

            let caught = panic::catch_unwind(|| call(|| panic!("boom")));
            assert!(caught.is_err());

            "done"
        });
        assert_eq!(value, "done");

        assert!(matches!(call(|| ()), Err(Error::MainThread)));

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| main(|| panic!("worker"))));
        assert!(outcome.is_err());
        assert!(matches!(call(|| ()), Err(Error::MainThread)));
    }
}
