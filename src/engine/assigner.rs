//! Greedy automatic assignment pass.
//!
//! Fills every `(slot, location)` pair the pins left uncovered, in a
//! single deterministic sweep: slots in chronological order, locations in
//! the caller's order. There is no backtracking and no optimization — a
//! pair that cannot meet its quotas is recorded unfilled and the sweep
//! moves on. Ties among equally-eligible candidates are broken only by
//! the priority partition (pinned workers first), then by input order.
//!
//! # Algorithm
//! For each uncovered pair:
//! 1. Build role pools from workers available for the pair's first slot,
//!    priority-set members stably ahead of the rest.
//! 2. Re-validate that pool against every slot interval the location's
//!    shift spans (the pool is never rebuilt for later slots).
//! 3. If both quotas can be met, take the first `managers_needed` managers
//!    and first `regulars_needed` regulars, record them over the whole
//!    span and mark one busy interval covering it.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4:
//! Priority Dispatching

use tracing::debug;

use super::aggregate::AssignmentBook;
use super::availability::AvailabilityLedger;
use super::pins::PrioritySet;
use crate::models::{Location, Role, TimeSlot, Worker};

/// Runs the greedy pass over every slot and location.
pub fn fill(
    slots: &[TimeSlot],
    workers: &[Worker],
    locations: &[Location],
    unit_hours: u32,
    priority: &PrioritySet,
    ledger: &mut AvailabilityLedger,
    book: &mut AssignmentBook,
) {
    for slot in slots {
        for location in locations {
            if book.is_covered(slot.index, &location.id) {
                continue;
            }

            let span_end = (slot.index + location.slots_to_fill(unit_hours)).min(slots.len());
            let span = &slots[slot.index..span_end];

            let mut managers = candidate_pool(workers, Role::Manager, slot, priority, ledger);
            let mut regulars = candidate_pool(workers, Role::Regular, slot, priority, ledger);

            // Lookahead: the pool chosen for the first slot must survive
            // the whole span; candidates free later but busy now were
            // never in the pool to begin with.
            managers.retain(|w| available_for_span(ledger, &w.id, span));
            regulars.retain(|w| available_for_span(ledger, &w.id, span));

            if managers.len() >= location.managers_needed as usize
                && regulars.len() >= location.regulars_needed as usize
            {
                let chosen: Vec<String> = managers
                    .iter()
                    .take(location.managers_needed as usize)
                    .chain(regulars.iter().take(location.regulars_needed as usize))
                    .map(|w| w.id.clone())
                    .collect();

                let span_start = slot.start;
                let span_finish = span.last().map_or(slot.end, |s| s.end);
                for covered in span {
                    book.record(covered.index, &location.id, chosen.clone());
                }
                for worker_id in &chosen {
                    ledger.mark_busy(worker_id, span_start, span_finish);
                }
            } else {
                debug!(
                    slot = slot.index,
                    location = %location.id,
                    "insufficient available staff, leaving slot unfilled"
                );
                book.record_unfilled(slot.index, &location.id);
            }
        }
    }
}

/// Workers of one role available for the slot, priority members first.
///
/// The partition is stable: input order is preserved inside each half.
fn candidate_pool<'a>(
    workers: &'a [Worker],
    role: Role,
    slot: &TimeSlot,
    priority: &PrioritySet,
    ledger: &AvailabilityLedger,
) -> Vec<&'a Worker> {
    let (mut preferred, rest): (Vec<&Worker>, Vec<&Worker>) = workers
        .iter()
        .filter(|w| w.has_role(role) && ledger.is_available(&w.id, slot.start, slot.end))
        .partition(|w| priority.contains(&w.id));
    preferred.extend(rest);
    preferred
}

fn available_for_span(ledger: &AvailabilityLedger, worker_id: &str, span: &[TimeSlot]) -> bool {
    span.iter()
        .all(|s| ledger.is_available(worker_id, s.start, s.end))
}
