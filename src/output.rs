use owo_colors::OwoColorize;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Skip lines are red like errors but go to stdout: they are expected
/// progress output, not failures.
pub fn print_skip(msg: &str) {
    if is_tty() {
        println!("{} {}", "skip:".red().bold(), msg);
    } else {
        println!("skip: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as the end-of-run summary which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
