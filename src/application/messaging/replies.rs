//! Reply texts sent back to the chat

use crate::domain::entities::LookupProfile;

pub const PONG: &str = "pong 🏓";
pub const NO_COMMANDS: &str = "📭 No custom commands yet.";

pub fn addlist_usage(prefix: char) -> String {
    format!(
        "{p}addlist <command> || <response> OR {p}addlist <command> (then send response)",
        p = prefix
    )
}

pub fn addlist_example(prefix: char) -> String {
    format!("{}addlist hi || hello", prefix)
}

pub fn dellist_usage(prefix: char) -> String {
    format!("{}dellist <command>", prefix)
}

pub fn stalk_usage(prefix: char) -> String {
    format!("{}stalk <userId> <zoneId>", prefix)
}

pub fn added(prefix: char, name: &str) -> String {
    format!("✅ Command {}{} added.", prefix, name)
}

pub fn added_with_response(prefix: char, name: &str) -> String {
    format!("✅ Command {}{} added with response.", prefix, name)
}

pub fn awaiting_response(prefix: char, name: &str) -> String {
    format!("✍️ Now send the reply text for {}{}", prefix, name)
}

pub fn deleted(prefix: char, name: &str) -> String {
    format!("🗑️ Deleted command {}{}", prefix, name)
}

pub fn command_list<'a>(prefix: char, names: impl IntoIterator<Item = &'a str>) -> String {
    let mut text = "📌 Custom commands:".to_string();
    for name in names {
        text.push('\n');
        text.push(prefix);
        text.push_str(name);
    }
    text
}

pub fn help(prefix: char) -> String {
    format!(
        "📌 Commands:\n\
         {p}ping\n\
         {p}addlist <command> || <response>\n\
         {p}addlist <command> (then send response)\n\
         {p}commands (list all)\n\
         {p}dellist <command>\n\
         {p}stalk <userId> <zoneId>\n\
         {p}help\n\n\
         ➡️ And you can use custom commands like {p}hello, {p}bye, etc.",
        p = prefix
    )
}

pub fn profile(profile: &LookupProfile) -> String {
    let mut text = format!(
        "🔍 ML Account Info\n\n🆔 User ID: {}\n🌍 Zone: {}\n👤 Nickname: {}",
        profile.user_id, profile.zone_id, profile.nickname
    );
    if let Some(level) = profile.level {
        text.push_str(&format!("\n⭐ Level: {}", level));
    }
    if let Some(rank) = &profile.rank {
        text.push_str(&format!("\n🏆 Rank: {}", rank));
    }
    if let Some(hero) = &profile.hero {
        text.push_str(&format!("\n🦸 Main Hero: {}", hero));
    }
    if let Some(win_rate) = profile.win_rate {
        text.push_str(&format!("\n📈 Win Rate: {:.1}%", win_rate));
    }
    if let Some(matches) = profile.matches {
        text.push_str(&format!("\n🎮 Matches: {}", matches));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_uses_configured_prefix() {
        let text = help('!');
        assert!(text.contains("!ping"));
        assert!(text.contains("!stalk <userId> <zoneId>"));
        assert!(!text.contains(".ping"));
    }

    #[test]
    fn profile_lists_only_known_fields() {
        let mut p = LookupProfile::new("123", "45", "Player");
        assert_eq!(
            profile(&p),
            "🔍 ML Account Info\n\n🆔 User ID: 123\n🌍 Zone: 45\n👤 Nickname: Player"
        );

        p.level = Some(30);
        p.win_rate = Some(52.5);
        let text = profile(&p);
        assert!(text.ends_with("⭐ Level: 30\n📈 Win Rate: 52.5%"));
    }
}
