//! Textual player intents accepted by `clicker play`.

use std::str::FromStr;

use clicker_core::Scenario;

/// One step of a scripted session.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// `click` or `click:<n>`
    Click(u32),
    /// `buy:<upgrade id>`
    Buy(String),
    Save,
    Load,
    /// `scenario:<early|mid|end_game_ready>`
    Scenario(Scenario),
    /// `tick:<seconds>`
    Tick(f64),
    BadEnding,
    GoodEnding,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseIntentError(String);

impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg.trim())),
            None => (s, None),
        };
        let invalid = |what: &str| ParseIntentError(format!("invalid {what} in `{s}`"));

        match (verb.trim(), arg) {
            ("click", None) => Ok(Intent::Click(1)),
            ("click", Some(n)) => n.parse().map(Intent::Click).map_err(|_| invalid("click count")),
            ("buy", Some(id)) if !id.is_empty() => Ok(Intent::Buy(id.to_string())),
            ("scenario", Some(name)) => name
                .parse()
                .map(Intent::Scenario)
                .map_err(|_| invalid("scenario")),
            ("tick", Some(secs)) => match secs.parse::<f64>() {
                Ok(dt) if dt.is_finite() && dt >= 0.0 => Ok(Intent::Tick(dt)),
                _ => Err(invalid("tick duration")),
            },
            ("save", None) => Ok(Intent::Save),
            ("load", None) => Ok(Intent::Load),
            ("bad-ending", None) => Ok(Intent::BadEnding),
            ("good-ending", None) => Ok(Intent::GoodEnding),
            ("status", None) => Ok(Intent::Status),
            _ => Err(ParseIntentError(format!("unknown command `{s}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        assert_eq!("click".parse::<Intent>(), Ok(Intent::Click(1)));
        assert_eq!("click:25".parse::<Intent>(), Ok(Intent::Click(25)));
        assert_eq!(
            "buy:stronger_pickaxe".parse::<Intent>(),
            Ok(Intent::Buy("stronger_pickaxe".into()))
        );
        assert_eq!("save".parse::<Intent>(), Ok(Intent::Save));
        assert_eq!("load".parse::<Intent>(), Ok(Intent::Load));
        assert_eq!("scenario:mid".parse::<Intent>(), Ok(Intent::Scenario(Scenario::Mid)));
        assert_eq!("tick:0.5".parse::<Intent>(), Ok(Intent::Tick(0.5)));
        assert_eq!("bad-ending".parse::<Intent>(), Ok(Intent::BadEnding));
        assert_eq!("good-ending".parse::<Intent>(), Ok(Intent::GoodEnding));
        assert_eq!("status".parse::<Intent>(), Ok(Intent::Status));
    }

    #[test]
    fn rejects_malformed_commands() {
        for bad in ["", "dig", "click:many", "buy:", "buy", "tick:-1", "tick:NaN", "scenario:late", "save:now"] {
            assert!(bad.parse::<Intent>().is_err(), "{bad}");
        }
    }

    #[test]
    fn parse_error_names_the_command() {
        let err = "dig".parse::<Intent>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command `dig`");

        let err = "tick:inf".parse::<Intent>().unwrap_err();
        assert_eq!(err.to_string(), "invalid tick duration in `tick:inf`");
    }
}
