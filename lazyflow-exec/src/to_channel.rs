// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Exporting a pipeline through a bounded channel.
//!
//! [`to_channel`](ToChannelExt::to_channel) is the only operation that runs a
//! pipeline off the calling thread. It spawns one producer thread that drives
//! the pipeline and sends each element with a blocking send:
//!
//! - when the channel is full the producer waits for the consumer
//! - when the source is exhausted the sender is dropped, closing the channel
//! - when every receiver has been dropped the next send fails and the producer
//!   stops the source
//!
//! There is no other way to cancel the producer.
//!
//! A panic raised while the producer drives the pipeline also closes the
//! channel, which the receiver cannot tell apart from exhaustion. The returned
//! [`ChannelExport`] keeps the producer thread so that
//! [`join`](ChannelExport::join) can re-raise that panic on the caller's thread.
//!
//! ```
//! use lazyflow_core::Pipeline;
//! use lazyflow_exec::ToChannelExt;
//!
//! let export = Pipeline::range(0, 3).to_channel(1)?;
//!
//! let mut out = Vec::new();
//! while let Ok(value) = export.receiver().recv_blocking() {
//!     out.push(value);
//! }
//! assert_eq!(out, vec![0, 1, 2]);
//! assert_eq!(export.join(), 3);
//! # Ok::<(), lazyflow_core::FlowError>(())
//! ```

use async_channel::Receiver;
use lazyflow_core::{Pipeline, Result};
use std::panic;
use std::thread::{self, JoinHandle};

/// The receiving end of a pipeline exported by [`ToChannelExt::to_channel`],
/// together with the producer thread feeding it.
#[derive(Debug)]
pub struct ChannelExport<T> {
    receiver: Receiver<T>,
    producer: JoinHandle<usize>,
}

impl<T> ChannelExport<T> {
    /// The channel the producer sends into.
    ///
    /// Clones share the same queue; the producer stops once every clone and
    /// this export have been dropped.
    #[must_use]
    pub const fn receiver(&self) -> &Receiver<T> {
        &self.receiver
    }

    /// Reports whether the producer thread has stopped, normally or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.producer.is_finished()
    }

    /// Releases this export's receiver and waits for the producer to stop.
    ///
    /// Returns the number of elements the producer delivered into the channel.
    /// Elements still buffered in the channel are discarded unless another
    /// clone of the receiver holds them.
    ///
    /// # Panics
    ///
    /// Re-raises the panic of any caller-supplied closure that failed while the
    /// producer was driving the pipeline.
    pub fn join(self) -> usize {
        let Self { receiver, producer } = self;
        drop(receiver);
        match producer.join() {
            Ok(sent) => sent,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /// Detaches the producer thread and keeps only the receiver.
    ///
    /// A producer panic can no longer be observed afterwards: the channel just
    /// closes early.
    #[must_use]
    pub fn into_receiver(self) -> Receiver<T> {
        self.receiver
    }
}

/// Extension trait providing the [`to_channel`](Self::to_channel) terminal operation.
pub trait ToChannelExt<T> {
    /// Drives the pipeline on a new thread, sending every element into a
    /// channel of the given capacity.
    ///
    /// A capacity of 0 is treated as 1, the closest a bounded channel gets to
    /// a rendezvous.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::TaskSpawn`](lazyflow_core::FlowError::TaskSpawn)
    /// if the producer thread cannot be started.
    fn to_channel(&self, capacity: usize) -> Result<ChannelExport<T>>;
}

impl<T: Send + 'static> ToChannelExt<T> for Pipeline<T> {
    fn to_channel(&self, capacity: usize) -> Result<ChannelExport<T>> {
        let (sender, receiver) = async_channel::bounded(capacity.max(1));
        let pipeline = self.clone();

        let producer = thread::Builder::new()
            .name("lazyflow-to-channel".to_string())
            .spawn(move || {
                debug!("to_channel producer started");
                let mut sent = 0usize;
                let mut abandoned = false;
                pipeline.drive(|value| {
                    if sender.send_blocking(value).is_err() {
                        abandoned = true;
                        return false;
                    }
                    sent += 1;
                    true
                });
                if abandoned {
                    debug!("to_channel receiver dropped after {} elements; producer stopped", sent);
                }
                debug!("to_channel producer finished after {} elements", sent);
                sent
            })?;

        Ok(ChannelExport { receiver, producer })
    }
}
