use std::{env, fs::read_to_string, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use frontend::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    lexer::lexer::Lexer,
    parser::parser::Parser,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("frontend");
        eprintln!("usage: {} <file>", program);
        return ExitCode::FAILURE;
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let file_contents = match read_to_string(&file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let lexer = Lexer::new(file_contents.clone(), Some(file_name));
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    println!("Parsed in {:?}", start.elapsed());

    for stmt in program.iter() {
        println!("{}", stmt);
    }

    if parser.diagnostics().is_empty() {
        return ExitCode::SUCCESS;
    }

    for error in parser.diagnostics() {
        display_error(error, &file_contents, &file_path);
    }

    ExitCode::FAILURE
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Error: message
        -> final.mk
           |
        20 | let 5 = x;
           | ----^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {} ({})", error.get_error_name(), error);
    } else {
        println!("Error: {} ({}; {})", error.get_error_name(), error, error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
