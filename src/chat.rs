// src/chat.rs

use crate::models::{ClientMessage, ServerMessage};

/// Delivers a notification to every connected client.
pub trait Announcer {
    fn announce(&self, message: ServerMessage);
}

/// Maps one client command to its notification and announces it.
///
/// Holds no state, so it may be called from any number of connections at once.
/// Every call results in exactly one `announce`.
pub fn handle<A: Announcer + ?Sized>(command: ClientMessage, announcer: &A) {
    let announcement = match command {
        ClientMessage::Connect { username, id } => ServerMessage::UserJoined { username, id },
        ClientMessage::NewMessage { content, id } => ServerMessage::NewMessage { content, id },
    };
    announcer.announce(announcement);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[derive(Default)]
    struct RecordingAnnouncer {
        announced: Mutex<Vec<ServerMessage>>,
    }

    impl Announcer for RecordingAnnouncer {
        fn announce(&self, message: ServerMessage) {
            self.announced.lock().unwrap().push(message);
        }
    }

    impl RecordingAnnouncer {
        fn taken(&self) -> Vec<ServerMessage> {
            std::mem::take(&mut *self.announced.lock().unwrap())
        }
    }

    #[test]
    fn connect_announces_user_joined() {
        let announcer = RecordingAnnouncer::default();
        handle(
            ClientMessage::Connect { username: "alice".into(), id: "conn-1".into() },
            &announcer,
        );
        assert_eq!(
            announcer.taken(),
            vec![ServerMessage::UserJoined { username: "alice".into(), id: "conn-1".into() }]
        );
    }

    #[test]
    fn new_message_announces_new_message() {
        let announcer = RecordingAnnouncer::default();
        handle(
            ClientMessage::NewMessage { content: "hello".into(), id: "conn-1".into() },
            &announcer,
        );
        assert_eq!(
            announcer.taken(),
            vec![ServerMessage::NewMessage { content: "hello".into(), id: "conn-1".into() }]
        );
    }

    #[test]
    fn sequential_calls_announce_in_call_order() {
        let announcer = RecordingAnnouncer::default();
        handle(
            ClientMessage::Connect { username: "bob".into(), id: "conn-2".into() },
            &announcer,
        );
        handle(
            ClientMessage::NewMessage { content: "hi all".into(), id: "conn-2".into() },
            &announcer,
        );
        assert_eq!(
            announcer.taken(),
            vec![
                ServerMessage::UserJoined { username: "bob".into(), id: "conn-2".into() },
                ServerMessage::NewMessage { content: "hi all".into(), id: "conn-2".into() },
            ]
        );
    }

    #[test]
    fn empty_fields_pass_through_untouched() {
        let announcer = RecordingAnnouncer::default();
        handle(ClientMessage::NewMessage { content: String::new(), id: String::new() }, &announcer);
        assert_eq!(
            announcer.taken(),
            vec![ServerMessage::NewMessage { content: String::new(), id: String::new() }]
        );
    }

    #[test]
    fn works_through_a_trait_object() {
        let recorder = RecordingAnnouncer::default();
        let announcer: &dyn Announcer = &recorder;
        handle(ClientMessage::Connect { username: "carol".into(), id: "c".into() }, announcer);
        assert_eq!(recorder.taken().len(), 1);
    }

    #[test]
    fn concurrent_calls_each_announce_once() {
        let announcer = Arc::new(RecordingAnnouncer::default());
        let workers: Vec<_> = (0..8)
            .map(|n| {
                let announcer = Arc::clone(&announcer);
                thread::spawn(move || {
                    for i in 0..50 {
                        handle(
                            ClientMessage::NewMessage {
                                content: format!("{n}-{i}"),
                                id: format!("conn-{n}"),
                            },
                            &*announcer,
                        );
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let announced = announcer.taken();
        assert_eq!(announced.len(), 400);
        assert!(announced.contains(&ServerMessage::NewMessage {
            content: "7-49".into(),
            id: "conn-7".into()
        }));
    }
}
