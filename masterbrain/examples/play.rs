use std::io;

use masterbrain::{Command, Config, Controller, EngineError, Presenter, Session};
use masterbrain_types::{Attempt, Code, ALL_COLORS};

struct Stdout;

impl Presenter for Stdout {
    fn render(&mut self, session: &Session) {
        for (idx, attempt) in session.history().iter().enumerate() {
            println!("{:2} {} {}", idx + 1, attempt.code, attempt.feedback);
        }
        println!("guess: {:?}", session.guess().slots());
    }

    fn won(&mut self, _attempt: &Attempt, attempts_used: usize) {
        println!("You win after {attempts_used} attempts!");
    }

    fn exhausted(&mut self, attempt: &Attempt, secret: &Code) {
        println!("last {} {}", attempt.code, attempt.feedback);
        println!("Out of attempts, the secret was {secret}");
    }

    fn incomplete(&mut self) {
        println!("Fill all slots first");
    }

    fn rejected(&mut self, error: &EngineError) {
        println!("{error}");
    }
}

fn main() {
    let mut controller = match Controller::new(&Config::default(), Stdout) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    for (idx, color) in ALL_COLORS.iter().enumerate() {
        println!("{idx} {color}");
    }
    println!("enter four color numbers, `new` or `quit`");
    let mut input = String::new();
    while io::stdin().read_line(&mut input).is_ok_and(|n| n > 0) {
        let line = input.trim().to_owned();
        input.clear();
        match line.as_str() {
            "quit" => break,
            "new" => controller.handle(Command::Init),
            _ => {
                let colors = line
                    .split_whitespace()
                    .filter_map(|s| s.parse::<usize>().ok())
                    .filter_map(|i| ALL_COLORS.get(i).copied());
                for (idx, color) in colors.enumerate() {
                    controller.handle(Command::SetSlot(idx, color));
                }
                controller.handle(Command::Submit);
            }
        }
    }
}
