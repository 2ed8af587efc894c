// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{event, keyboard, time, window, Event, Subscription};
use std::time::Duration;

/// Interval of the notification auto-dismiss check.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Window-wide keyboard listener: Escape maps to [`Message::EscapePressed`].
///
/// The key is caught even when a text input has focus.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(escape_filter)
}

fn escape_filter(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}

/// Ticks the notification manager while it holds anything.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::{Code, Named, Physical};
    use iced::keyboard::{Key, Location, Modifiers};

    fn key_press(key: Key, physical: Physical) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: physical,
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn escape_press_becomes_escape_message() {
        let event = key_press(Key::Named(Named::Escape), Physical::Code(Code::Escape));
        let message = escape_filter(event, event::Status::Ignored, window::Id::unique());
        assert!(matches!(message, Some(Message::EscapePressed)));
    }

    #[test]
    fn escape_is_caught_even_when_captured_by_a_widget() {
        let event = key_press(Key::Named(Named::Escape), Physical::Code(Code::Escape));
        let message = escape_filter(event, event::Status::Captured, window::Id::unique());
        assert!(matches!(message, Some(Message::EscapePressed)));
    }

    #[test]
    fn other_keys_are_ignored() {
        let enter = key_press(Key::Named(Named::Enter), Physical::Code(Code::Enter));
        assert!(escape_filter(enter, event::Status::Ignored, window::Id::unique()).is_none());

        let letter = key_press(Key::Character("e".into()), Physical::Code(Code::KeyE));
        assert!(escape_filter(letter, event::Status::Ignored, window::Id::unique()).is_none());
    }
}
