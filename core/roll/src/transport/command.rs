use log::warn;
use rtrb::{Consumer, Producer, RingBuffer};

use crate::{instrument::InstrumentId, transport::TransportControl};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportCommand {
    StopPlayback,
    StartPlayback,
    SeekTo {
        fraction: f64,
    },
    ProbeSoundAt {
        fraction: f64,
        instrument: Option<InstrumentId>,
    },
    AllSoundOff,
}

pub type TransportCommandProducer = Producer<TransportCommand>;
pub type TransportCommandConsumer = Consumer<TransportCommand>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandQueueError {
    RingFull,
}

/// Transport seam backed by an SPSC ring the audio side drains.
///
/// Written from the event thread only. A full ring drops the command; the
/// drop is logged and counted, never blocked on.
#[derive(Debug)]
pub struct CommandQueueTransport {
    producer: TransportCommandProducer,
    dropped: u64,
}

impl CommandQueueTransport {
    pub fn new(producer: TransportCommandProducer) -> Self {
        Self {
            producer,
            dropped: 0,
        }
    }

    /// Ring plus the transport wired to its producing half.
    pub fn with_capacity(capacity: usize) -> (Self, TransportCommandConsumer) {
        let (producer, consumer) = RingBuffer::new(capacity);
        (Self::new(producer), consumer)
    }

    pub fn try_send(&mut self, command: TransportCommand) -> Result<(), CommandQueueError> {
        self.producer
            .push(command)
            .map_err(|_| CommandQueueError::RingFull)
    }

    pub fn dropped_commands(&self) -> u64 {
        self.dropped
    }

    fn send(&mut self, command: TransportCommand) {
        if self.try_send(command).is_err() {
            self.dropped += 1;
            warn!("transport command ring full, dropping {command:?}");
        }
    }
}

impl TransportControl for CommandQueueTransport {
    fn stop_playback(&mut self) {
        self.send(TransportCommand::StopPlayback);
    }

    fn start_playback(&mut self) {
        self.send(TransportCommand::StartPlayback);
    }

    fn seek_to(&mut self, fraction: f64) {
        self.send(TransportCommand::SeekTo { fraction });
    }

    fn probe_sound_at(&mut self, fraction: f64, instrument: Option<InstrumentId>) {
        self.send(TransportCommand::ProbeSoundAt {
            fraction,
            instrument,
        });
    }

    fn all_sound_off(&mut self) {
        self.send(TransportCommand::AllSoundOff);
    }
}

#[cfg(test)]
mod command_tests {
    use super::*;

    #[test]
    fn test_commands_travel_through_the_ring() {
        let (mut transport, mut consumer) = CommandQueueTransport::with_capacity(8);

        transport.stop_playback();
        transport.seek_to(0.25);
        transport.start_playback();

        assert_eq!(consumer.pop().unwrap(), TransportCommand::StopPlayback);
        assert_eq!(
            consumer.pop().unwrap(),
            TransportCommand::SeekTo { fraction: 0.25 }
        );
        assert_eq!(consumer.pop().unwrap(), TransportCommand::StartPlayback);
        assert!(consumer.pop().is_err());
    }

    #[test]
    fn test_full_ring_drops_instead_of_blocking() {
        let (mut transport, mut consumer) = CommandQueueTransport::with_capacity(1);

        transport.seek_to(0.1);
        transport.seek_to(0.2); // ring full, dropped

        assert_eq!(transport.dropped_commands(), 1);
        assert_eq!(
            consumer.pop().unwrap(),
            TransportCommand::SeekTo { fraction: 0.1 }
        );
        assert!(consumer.pop().is_err());
    }

    #[test]
    fn test_try_send_reports_ring_full() {
        let (mut transport, _consumer) = CommandQueueTransport::with_capacity(1);
        assert!(transport.try_send(TransportCommand::AllSoundOff).is_ok());
        assert_eq!(
            transport.try_send(TransportCommand::AllSoundOff),
            Err(CommandQueueError::RingFull)
        );
    }
}
