//! The single-server event-driven state machine.

use crate::queue::arrivals::ArrivalProcess;
use crate::queue::client::Client;
use crate::queue::event::{Event, EventKind};
use crate::queue::service::ServiceProcess;
use crate::simulation::error::{SimulationError, SimulationResult};
use tracing::trace;

/// Everything a finished shift run leaves behind.
///
/// The event log is chronological and append-only; the client list is in
/// arrival order, and every client has a departure once the run terminated.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftOutcome {
    /// All clients of the run, in arrival order.
    pub clients: Vec<Client>,
    /// Chronological event log.
    pub events: Vec<Event>,
    /// Simulation clock at termination; past `shift_length` when the queue
    /// drained after closing time.
    pub final_clock: f64,
    /// Nominal shift length in simulation hours.
    pub shift_length: f64,
}

/// One shift of a single-server FIFO queue with unbounded capacity.
///
/// Arrival instants and service durations are pulled from the generators on
/// demand; the engine is the sole owner of simulation state. Arrivals stop at
/// closing time but clients already present are served to completion.
#[derive(Debug)]
pub struct ShiftSimulation<A, S> {
    arrivals: A,
    service: S,
    shift_length: f64,

    clock: f64,
    arrived: u32,
    departed: u32,
    queue_length: u32,
    next_arrival: f64,
    next_departure: f64,

    clients: Vec<Client>,
    events: Vec<Event>,
}

impl<A: ArrivalProcess, S: ServiceProcess> ShiftSimulation<A, S> {
    /// Set up a fresh run: clock at 0, empty system, no departure scheduled.
    pub fn new(arrivals: A, service: S, shift_length: f64) -> Self {
        Self {
            arrivals,
            service,
            shift_length,
            clock: 0.0,
            arrived: 0,
            departed: 0,
            queue_length: 0,
            next_arrival: 0.0,
            next_departure: f64::INFINITY,
            clients: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Execute the run to its terminal state.
    ///
    /// The transition chain per step: an arrival due no later than the next
    /// departure and no later than closing wins; otherwise an in-shift
    /// departure; otherwise, with both pending events past closing, the queue
    /// is drained; an empty queue past closing terminates the run.
    pub fn run(mut self) -> SimulationResult<ShiftOutcome> {
        self.next_arrival = self.arrivals.first_arrival();
        self.next_departure = f64::INFINITY;

        loop {
            if self.next_arrival <= self.next_departure && self.next_arrival <= self.shift_length
            {
                self.arrive();
            } else if self.next_departure < self.next_arrival
                && self.next_departure <= self.shift_length
            {
                self.depart()?;
            } else if self.queue_length > 0 {
                // Both pending events are past closing time: keep serving
                // whoever is still inside.
                self.depart()?;
            } else {
                break;
            }
        }

        Ok(ShiftOutcome {
            clients: self.clients,
            events: self.events,
            final_clock: self.clock,
            shift_length: self.shift_length,
        })
    }

    fn arrive(&mut self) {
        self.clock = self.next_arrival;
        self.arrived += 1;
        self.queue_length += 1;

        self.next_arrival = self.arrivals.next_arrival(self.clock);
        if self.queue_length == 1 {
            // The counter was idle; this client starts service immediately.
            self.next_departure = self.clock + self.service.service_duration();
        }

        self.clients.push(Client::new(self.arrived, self.clock));
        self.events.push(Event {
            client_id: self.arrived,
            kind: EventKind::Arrive,
            time: self.clock,
            queue_size: self.queue_length,
        });
        trace!(client = self.arrived, time = self.clock, queue = self.queue_length, "arrival");
    }

    fn depart(&mut self) -> SimulationResult<()> {
        if self.queue_length == 0 {
            return Err(SimulationError::invariant("departure requested with an empty queue"));
        }

        self.clock = self.next_departure;
        self.departed += 1;
        self.queue_length -= 1;

        self.next_departure = if self.queue_length == 0 {
            f64::INFINITY
        } else {
            self.clock + self.service.service_duration()
        };

        // Departures are FIFO, so the earliest client without a recorded
        // departure is the one finishing right now and the second-earliest is
        // the one whose service begins at this instant. Resolve the latter
        // before stamping the departure.
        let now = self.clock;
        let entering_service = {
            let mut present = self.clients.iter().filter(|c| c.leave_time.is_none());
            let _finishing = present.next();
            present.next().map(|c| c.id)
        };

        let departing = self.departed;
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.id == departing)
            .ok_or_else(|| {
                SimulationError::invariant(format!("no client with id {departing} at departure"))
            })?;
        client.leave_time = Some(now);

        if let Some(id) = entering_service {
            if let Some(next) = self.clients.iter_mut().find(|c| c.id == id) {
                // Queue wait is recorded when service begins, not at leave.
                next.in_queue_time = now - next.arrival_time;
            }
        }

        self.events.push(Event {
            client_id: departing,
            kind: EventKind::Leave,
            time: now,
            queue_size: self.queue_length,
        });
        trace!(client = departing, time = now, queue = self.queue_length, "departure");
        Ok(())
    }
}
