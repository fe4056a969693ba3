use crate::{
    coordinator::{
        action::Action,
        effect::{perform, Effect},
    },
    logging::logger::log_warning,
    providers::{player_reader::PlayerReader, player_writer::PlayerWriter},
};
use std::sync::Arc;
use tokio::{spawn, sync::mpsc::UnboundedSender, task::JoinHandle};

/// Runs every effect on its own task and reports the completion through
/// `tx`. Nothing orders completions: the last one to land wins.
pub struct EffectRunner<
    R: PlayerReader + Send + Sync + 'static,
    W: PlayerWriter + Send + Sync + 'static,
> {
    reader: Arc<R>,
    writer: Arc<W>,
    tx: UnboundedSender<Action>,
}

impl<R: PlayerReader + Send + Sync + 'static, W: PlayerWriter + Send + Sync + 'static>
    EffectRunner<R, W>
{
    pub fn new(reader: Arc<R>, writer: Arc<W>, tx: UnboundedSender<Action>) -> Self {
        Self { reader, writer, tx }
    }

    pub fn spawn(&self, effect: Effect) -> JoinHandle<()> {
        let reader = Arc::clone(&self.reader);
        let writer = Arc::clone(&self.writer);
        let tx = self.tx.clone();
        spawn(async move {
            let action = perform(effect, reader.as_ref(), writer.as_ref()).await;
            if tx.send(action).is_err() {
                log_warning("completion dropped: the event loop is gone");
            }
        })
    }

    pub fn spawn_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.spawn(effect);
        }
    }
}
