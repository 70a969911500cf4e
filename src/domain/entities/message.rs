use chrono::{DateTime, Utc};

/// Body of an inbound chat message, one variant per payload shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Plain text message
    Conversation(String),
    /// Text with a quote or link preview attached
    ExtendedText(String),
    /// A tapped button; the text is the selected button id
    ButtonReply(String),
    /// Media, stickers, reactions and everything else without text
    Unsupported(String),
}

impl MessageBody {
    pub fn kind(&self) -> &str {
        match self {
            MessageBody::Conversation(_) => "conversation",
            MessageBody::ExtendedText(_) => "extended_text",
            MessageBody::ButtonReply(_) => "button_reply",
            MessageBody::Unsupported(kind) => kind,
        }
    }

    /// Normalized text of the body, `None` for non-text payloads
    pub fn text(&self) -> Option<&str> {
        match self {
            MessageBody::Conversation(text)
            | MessageBody::ExtendedText(text)
            | MessageBody::ButtonReply(text) => Some(text),
            MessageBody::Unsupported(_) => None,
        }
    }
}

/// A message delivered by the session
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub id: String,
    /// Chat or group the message was posted in
    pub conversation_id: String,
    /// Author inside a group chat; absent in direct chats
    pub participant: Option<String>,
    pub from_me: bool,
    pub body: Option<MessageBody>,
    pub timestamp: DateTime<Utc>,
}

impl InboundMessage {
    pub fn new(conversation_id: impl Into<String>, body: Option<MessageBody>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            conversation_id: conversation_id.into(),
            participant: None,
            from_me: false,
            body,
            timestamp: Utc::now(),
        }
    }

    pub fn from_text(conversation_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(conversation_id, Some(MessageBody::Conversation(text.into())))
    }

    pub fn with_participant(mut self, participant: impl Into<String>) -> Self {
        self.participant = Some(participant.into());
        self
    }

    pub fn from_me(mut self, from_me: bool) -> Self {
        self.from_me = from_me;
        self
    }

    /// Who sent the message: the group participant, or the chat itself
    pub fn sender(&self) -> &str {
        self.participant.as_deref().unwrap_or(&self.conversation_id)
    }

    pub fn text(&self) -> Option<&str> {
        self.body.as_ref().and_then(MessageBody::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_extracted_from_every_text_variant() {
        let conversation = MessageBody::Conversation("hi".into());
        let extended = MessageBody::ExtendedText("quoted".into());
        let button = MessageBody::ButtonReply(".ping".into());

        assert_eq!(conversation.text(), Some("hi"));
        assert_eq!(extended.text(), Some("quoted"));
        assert_eq!(button.text(), Some(".ping"));
        assert_eq!(MessageBody::Unsupported("image".into()).text(), None);
    }

    #[test]
    fn kind_names_the_payload() {
        assert_eq!(MessageBody::ExtendedText("x".into()).kind(), "extended_text");
        assert_eq!(MessageBody::Unsupported("sticker".into()).kind(), "sticker");
    }

    #[test]
    fn message_without_body_has_no_text() {
        let msg = InboundMessage::new("chat@g.us", None);
        assert_eq!(msg.text(), None);
    }

    #[test]
    fn sender_prefers_participant() {
        let direct = InboundMessage::from_text("123@s.whatsapp.net", ".ping");
        assert_eq!(direct.sender(), "123@s.whatsapp.net");

        let group = InboundMessage::from_text("group@g.us", ".ping").with_participant("456@s.whatsapp.net");
        assert_eq!(group.sender(), "456@s.whatsapp.net");
    }
}
