//! Help text shown by the `help` command.

pub(crate) const ADD_USAGE: &str = "add <name> <phone>";
pub(crate) const CHANGE_USAGE: &str = "change <name> <old_phone> <new_phone>";
pub(crate) const PHONE_USAGE: &str = "phone <name>";
pub(crate) const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
pub(crate) const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

const HELP_TEXT: &str = "\
Available commands:
hello                                   - Greet the bot
add <name> <phone>                      - Add a new contact or phone to existing contact
change <name> <old_phone> <new_phone>   - Change existing contact's phone number
phone <name>                            - Show contact's phone numbers
all                                     - Show all contacts
add-birthday <name> <DD.MM.YYYY>        - Add birthday to contact
show-birthday <name>                    - Show contact's birthday
birthdays                               - Show upcoming birthdays this week
help                                    - Show this help message
exit/close                              - Exit the program

Examples:
add John 1234567890
change John 1234567890 0987654321
phone John
add-birthday John 15.03.1990
show-birthday John
birthdays
all";

pub fn show_help() -> &'static str {
    HELP_TEXT
}
