//! Multi-threaded search
//!
//! The attempt budget is split evenly into one lane per worker. The calling
//! thread hands out each lane's budget in batches over a bounded per-worker
//! task channel and listens for worker events on a shared bounded channel.
//! Workers send attempt counts after each batch and their search state when
//! their lane closes. Cancellation and a qualifying grid both stop further
//! dispatch; batches already handed out run to completion.

use super::cancel::CancelToken;
use super::comparator::AttemptRecord;
use super::options::GenerationOptions;
use super::orchestrator::{SearchState, Session};
use super::progress::ProgressSink;
use crate::core::PuzzleError;
use crossbeam_channel::{Receiver, Sender, bounded, select};
use std::thread;

/// Attempts handed to a worker at a time
pub const BATCH_ATTEMPTS: usize = 25;

enum WorkerEvent {
    Progress(usize),
    Qualified,
    Done(SearchState),
}

struct Lane {
    tasks: Option<Sender<usize>>,
    remaining: usize,
}

/// Split `total` into `workers` near-equal shares, larger shares first
fn partition(total: usize, workers: usize) -> Vec<usize> {
    let base = total / workers;
    let extra = total % workers;
    (0..workers).map(|i| base + usize::from(i < extra)).collect()
}

/// Run the search on `options.workers` threads
///
/// Returns the reduced state and whether cancellation stopped dispatch.
///
/// # Errors
/// Returns `PuzzleError::WorkerFailure` if no worker finished normally.
pub(crate) fn run(
    session: &Session<'_>,
    options: &GenerationOptions,
    progress: &dyn ProgressSink,
    cancel: Option<&CancelToken>,
) -> Result<(SearchState, bool), PuzzleError> {
    let workers = options.workers;
    let (event_tx, event_rx) = bounded::<WorkerEvent>(workers * 2);

    thread::scope(|scope| {
        let mut lanes = Vec::with_capacity(workers);
        let mut handles = Vec::with_capacity(workers);
        for (id, share) in partition(options.max_attempts, workers).into_iter().enumerate() {
            let (task_tx, task_rx) = bounded::<usize>(1);
            let events = event_tx.clone();
            handles.push(scope.spawn(move || worker(id, session, &task_rx, &events)));
            lanes.push(Lane {
                tasks: Some(task_tx),
                remaining: share,
            });
        }
        drop(event_tx);
        log::debug!("started {workers} workers for {} attempts", options.max_attempts);

        let (reports, cancelled) = dispatch(&mut lanes, &event_rx, progress, cancel);

        let failed = handles
            .into_iter()
            .enumerate()
            .filter_map(|(id, handle)| handle.join().is_err().then_some(id))
            .inspect(|id| log::warn!("worker {id} terminated abnormally; its attempts are discarded"))
            .count();

        if reports.is_empty() {
            return Err(PuzzleError::WorkerFailure { failed });
        }
        Ok((reduce(reports), cancelled))
    })
}

/// Feed batches to lanes until every lane is spent or stopped, collecting events
fn dispatch(
    lanes: &mut [Lane],
    events: &Receiver<WorkerEvent>,
    progress: &dyn ProgressSink,
    cancel: Option<&CancelToken>,
) -> (Vec<SearchState>, bool) {
    let mut reports = Vec::with_capacity(lanes.len());
    let mut qualified = false;
    let mut cancelled = false;
    let mut cursor = 0;

    loop {
        if !cancelled && cancel.is_some_and(CancelToken::is_cancelled) {
            log::info!("cancellation requested; no further batches will be dispatched");
            cancelled = true;
        }
        for lane in lanes.iter_mut() {
            if qualified || cancelled || lane.remaining == 0 {
                lane.tasks = None;
            }
        }

        // Round-robin over lanes that still have budget
        let next = (0..lanes.len())
            .map(|k| (cursor + k) % lanes.len())
            .find_map(|i| lanes[i].tasks.clone().map(|tx| (i, tx)));

        let event = if let Some((i, tx)) = next {
            let batch = lanes[i].remaining.min(BATCH_ATTEMPTS);
            select! {
                send(tx, batch) -> sent => {
                    if sent.is_ok() {
                        lanes[i].remaining -= batch;
                        cursor = i + 1;
                    } else {
                        // Worker is gone; its lane closes with it
                        lanes[i].remaining = 0;
                    }
                    continue;
                },
                recv(events) -> event => event,
            }
        } else {
            events.recv()
        };

        match event {
            Ok(WorkerEvent::Progress(n)) => progress.advance(n as u64),
            Ok(WorkerEvent::Qualified) => qualified = true,
            Ok(WorkerEvent::Done(state)) => reports.push(state),
            // Every worker has exited
            Err(_) => break,
        }
    }
    (reports, cancelled)
}

fn worker(id: usize, session: &Session<'_>, tasks: &Receiver<usize>, events: &Sender<WorkerEvent>) {
    let mut rng = rand::rng();
    let mut state = SearchState::default();

    'batches: for batch in tasks {
        for done in 1..=batch {
            if state.step(session, &mut rng) {
                let _ = events.send(WorkerEvent::Progress(done));
                let _ = events.send(WorkerEvent::Qualified);
                break 'batches;
            }
        }
        let _ = events.send(WorkerEvent::Progress(batch));
    }

    log::debug!("worker {id} finished after {} attempts", state.attempts);
    let _ = events.send(WorkerEvent::Done(state));
}

/// Fold worker states into one
///
/// The qualifying grid with the most words wins; failing that, the best
/// attempt with the most words. Attempts are summed; revisions come from the
/// worker whose attempt was chosen.
fn reduce(reports: Vec<SearchState>) -> SearchState {
    let attempts = reports.iter().map(|s| s.attempts).sum();
    let word_count = |record: &AttemptRecord| record.words.len();

    let mut qualified: Option<(AttemptRecord, usize)> = None;
    let mut best: Option<(AttemptRecord, usize)> = None;
    for state in reports {
        if let Some(record) = state.qualified
            && qualified.as_ref().is_none_or(|(q, _)| word_count(&record) > word_count(q))
        {
            qualified = Some((record, state.revisions));
        }
        if let Some(record) = state.best
            && best.as_ref().is_none_or(|(b, _)| word_count(&record) > word_count(b))
        {
            best = Some((record, state.revisions));
        }
    }

    let revisions = qualified
        .as_ref()
        .or(best.as_ref())
        .map_or(0, |(_, revisions)| *revisions);
    SearchState {
        attempts,
        revisions,
        best: best.map(|(record, _)| record),
        qualified: qualified.map(|(record, _)| record),
    }
}
