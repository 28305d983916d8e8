use std::io::{self, Write as _};

use log::info;

use crate::config::Config;
use crate::utils::{print_err, unwrap_or_def_verbose};

mod config;
mod input;
mod logging;
mod store;
mod utils;

fn main() {
    let _logger = logging::init();
    let config = unwrap_or_def_verbose(store::load_config());
    let responder = store::load_responder(&config);
    let exit_word = config.exit_word.to_lowercase();

    print_welcome(&config);
    info!("Support session started.");
    loop {
        print!("{}", config.prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break, // end of input
            Ok(_) => {}
            Err(e) => {
                print_err(&e);
                break;
            }
        }

        let words = input::words(&line);
        if words.contains(exit_word.as_str()) {
            break;
        }
        println!("{}", responder.generate_response(&words));
    }
    print_goodbye();
    info!("Support session finished.");
}

fn print_welcome(config: &Config) {
    println!("Welcome to the DodgySoft Technical Support System.");
    println!();
    println!("Please tell us about the problem you are having.");
    println!("Type '{}' when you are done.", config.exit_word);
}

fn print_goodbye() {
    println!("Nice talking to you. Bye...");
}
