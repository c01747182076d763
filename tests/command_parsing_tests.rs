use laundry_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_help_command_parsing() {
        let input = "/help";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Help);
    }

    #[test]
    fn test_start_command_parsing() {
        let input = "/start";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Start);
    }

    #[test]
    fn test_status_command_parsing() {
        let input = "/status";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Status);
    }

    #[test]
    fn test_load_command_with_machine() {
        let input = "/load washer1";
        let result = Command::parse(input, "testbot");

        assert!(result.is_ok());
        match result.unwrap() {
            Command::Load { machine } => {
                assert_eq!(machine, "washer1");
            }
            _ => panic!("Expected Load command"),
        }
    }

    #[test]
    fn test_load_command_with_dryer() {
        let input = "/load dryer2";
        let result = Command::parse(input, "testbot");

        assert!(result.is_ok());
        match result.unwrap() {
            Command::Load { machine } => {
                assert_eq!(machine, "dryer2");
            }
            _ => panic!("Expected Load command"),
        }
    }

    #[test]
    fn test_load_command_addressed_to_bot() {
        let input = "/load@testbot washer2";
        let result = Command::parse(input, "testbot");

        assert!(result.is_ok());
        match result.unwrap() {
            Command::Load { machine } => {
                assert_eq!(machine, "washer2");
            }
            _ => panic!("Expected Load command"),
        }
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let input = "/unload washer1";
        let result = Command::parse(input, "testbot");
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        let input = "is the washer free?";
        let result = Command::parse(input, "testbot");
        assert!(result.is_err());
    }
}
