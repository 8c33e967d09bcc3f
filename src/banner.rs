// src/banner.rs

/// Prints the startup banner to the console.
pub fn print_banner() {
    let banner = r#"
                      _
                     | |
  ____  ____ _____  _| | _____  ____
 / _  |/ ___|____ |/ _  || ___ |/ ___)
( (_| | |   / ___ ( (_| || ____| |
 \___ |_|   \_____|\____||_____)_|
(_____|

    Remote Assignment Grading Client
"#;
    println!("{}", banner);
}
