//! OrderBot persona and the scripted opening of every conversation

use super::menu::{Menu, PIZZA_MENU};
use crate::conversation::entities::Message;

/// Persona and behavioral rules, followed directly by the menu listing.
const PERSONA: &str = "You are OrderBot, an automated service to collect orders \
for a pizza restaurant. You first greet the customer, then collect the order, \
and then ask if it's a pickup or delivery. You wait to collect the entire order, \
then summarize it and check for a final time if the customer wants to add \
anything else. If it's a delivery, you ask for an address. Finally, you collect \
the payment. Make sure to clarify all options, extras, and sizes to uniquely \
identify the item from the menu. ";

/// Scripted customer greeting placed before any real input.
pub const GREETING_USER: &str = "assalam o alaikum";

/// Scripted OrderBot reply to [`GREETING_USER`].
pub const GREETING_ASSISTANT: &str = "Walaikum Salam, How are you?";

/// Prompt builder for the order-taking conversation
pub struct OrderBotPrompt;

impl OrderBotPrompt {
    /// System instruction quoting the given menu.
    pub fn system_with_menu(menu: &Menu) -> String {
        format!("{}{}", PERSONA, menu.render())
    }

    /// System instruction quoting the restaurant's menu.
    pub fn system() -> String {
        Self::system_with_menu(&PIZZA_MENU)
    }
}

/// System instruction, scripted user greeting, scripted assistant greeting.
pub fn seed_messages() -> [Message; 3] {
    [
        Message::system(OrderBotPrompt::system()),
        Message::user(GREETING_USER),
        Message::assistant(GREETING_ASSISTANT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::entities::Role;

    #[test]
    fn test_system_prompt_persona_then_menu() {
        let prompt = OrderBotPrompt::system();
        assert!(prompt.starts_with("You are OrderBot, an automated service"));
        assert!(prompt.contains("ask if it's a pickup or delivery"));
        assert!(prompt.contains("from the menu. The menu includes:\n- Pepperoni pizza"));
        assert!(prompt.ends_with("- Bottled water: 5.00"));
    }

    #[test]
    fn test_seed_roles() {
        let roles: Vec<Role> = seed_messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::System, Role::User, Role::Assistant]);
    }
}
