use std::env;

/// Whether rendered output should carry color and emphasis
pub fn color_enabled(disable_color: bool) -> bool {
    !disable_color
        && !env_disables_color(|key| env::var(key).ok())
        && atty::is(atty::Stream::Stdout)
}

/// `NO_COLOR` (https://no-color.org) or a dumb terminal
pub fn env_disables_color(lookup: impl Fn(&str) -> Option<String>) -> bool {
    if lookup("NO_COLOR").is_some() {
        return true;
    }
    lookup("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}
