use rustyline::{error::ReadlineError, Editor};
use std::str::FromStr;

pub enum ReadAndParseUserEntryRes<T>
where
    T: FromStr,
{
    Ok(T),
    EmptyEntry,
    ParseErr {
        e: <T as FromStr>::Err,
        user_entry: String,
    },
    ReadErr(ReadlineError),
}

pub fn parse_user_entry<T>(user_entry: String) -> ReadAndParseUserEntryRes<T>
where
    T: FromStr,
{
    let trimmed = user_entry.trim();
    if trimmed.is_empty() {
        ReadAndParseUserEntryRes::EmptyEntry
    } else {
        match trimmed.parse::<T>() {
            Ok(e) => ReadAndParseUserEntryRes::Ok(e),
            Err(e) => ReadAndParseUserEntryRes::ParseErr { e, user_entry },
        }
    }
}

pub fn read_and_parse_user_entry<T>(msg: &str) -> ReadAndParseUserEntryRes<T>
where
    T: FromStr,
{
    let mut editor = Editor::<()>::new();
    match editor.readline(&format!("{}: ", msg)) {
        Ok(user_entry) => parse_user_entry(user_entry),
        Err(e) => ReadAndParseUserEntryRes::ReadErr(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_number() {
        match parse_user_entry::<usize>(" 2 ".to_string()) {
            ReadAndParseUserEntryRes::Ok(n) => assert_eq!(n, 2),
            _ => panic!("expected Ok"),
        }
    }

    #[test]
    fn blank_is_empty_entry() {
        assert!(matches!(
            parse_user_entry::<usize>("   ".to_string()),
            ReadAndParseUserEntryRes::EmptyEntry
        ));
    }

    #[test]
    fn garbage_keeps_entry() {
        match parse_user_entry::<usize>("two".to_string()) {
            ReadAndParseUserEntryRes::ParseErr { user_entry, .. } => assert_eq!(user_entry, "two"),
            _ => panic!("expected ParseErr"),
        }
    }
}
