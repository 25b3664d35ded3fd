use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use phonetiser_core::translit::to_buckwalter;
use phonetiser_core::{persistence, Phonetiser, PhonetiserConfig};
use std::io::{self, stdin, stdout, Write};
use std::path::PathBuf;

fn lexicon_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("levantine-phonetiser");
    path.push("user_lexicon.bin");
    path
}

fn main() -> io::Result<()> {
    let path = lexicon_path();
    let mut lexicon = persistence::load_lexicon(&path).unwrap_or_default();
    let mut config = PhonetiserConfig::default();
    let mut engine = Phonetiser::with_lexicon(config, lexicon.clone());

    print_banner(config)?;

    loop {
        prompt()?;
        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }

        match input.trim() {
            "exit" => break,
            "" => {}
            ":urban" => {
                config.urban = true;
                engine = Phonetiser::with_lexicon(config, lexicon.clone());
                print_config(config)?;
            }
            ":rural" => {
                config.urban = false;
                engine = Phonetiser::with_lexicon(config, lexicon.clone());
                print_config(config)?;
            }
            ":feminine" => {
                config.simplify_feminine_endings = true;
                engine = Phonetiser::with_lexicon(config, lexicon.clone());
                print_config(config)?;
            }
            ":plain" => {
                config.simplify_feminine_endings = false;
                engine = Phonetiser::with_lexicon(config, lexicon.clone());
                print_config(config)?;
            }
            s if s.starts_with(":add") => {
                let mut parts = s.split_whitespace();
                parts.next(); // the command itself
                match parts.next() {
                    Some(word) => {
                        let phones: Vec<&str> = parts.collect();
                        if phones.is_empty() {
                            println!("Usage: :add <word> <phoneme> [phoneme ...]");
                        } else {
                            lexicon.insert(word, vec![phones.join(" ")]);
                            engine = Phonetiser::with_lexicon(config, lexicon.clone());
                            println!("Added '{}' -> {}", word, phones.join(" "));
                        }
                    }
                    None => println!("Usage: :add <word> <phoneme> [phoneme ...]"),
                }
            }
            text => render_line(&engine, text)?,
        }
    }

    println!("\nSaving lexicon...");
    match persistence::save_lexicon(&lexicon, &path) {
        Ok(()) => println!("Lexicon saved to '{}'", path.display()),
        Err(e) => eprintln!("[ERROR] Could not save lexicon: {}", e),
    }
    Ok(())
}

fn print_banner(config: PhonetiserConfig) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    execute!(
        out,
        SetForegroundColor(Color::Green),
        Print("Levantine Phonetiser"),
        ResetColor
    )?;
    writeln!(out)?;
    writeln!(out, "Type Arabic text to see its pronunciations. 'exit' saves and quits.")?;
    writeln!(out, "Commands: :urban :rural :feminine :plain :add <word> <phonemes...>")?;
    print_config(config)?;
    writeln!(out, "---------------------------------------------------------------")?;
    Ok(())
}

fn print_config(config: PhonetiserConfig) -> io::Result<()> {
    let dialect = if config.urban {
        "urban (qaf as glottal stop)"
    } else {
        "rural (qaf preserved)"
    };
    let endings = if config.simplify_feminine_endings {
        "simplified"
    } else {
        "literal"
    };
    writeln!(stdout(), "Dialect: {} | Feminine endings: {}", dialect, endings)
}

fn prompt() -> io::Result<()> {
    execute!(stdout(), SetForegroundColor(Color::DarkGrey), Print("> "), ResetColor)
}

fn render_line(engine: &Phonetiser, text: &str) -> io::Result<()> {
    let (_, per_word) = engine.phonetise(text);
    let mut out = stdout();

    for (word, pronunciations) in text.split_whitespace().zip(per_word.iter()) {
        execute!(out, SetForegroundColor(Color::Cyan), Print(word), ResetColor)?;
        writeln!(out, "  [{}]", to_buckwalter(word))?;
        for reading in pronunciations {
            if reading.is_empty() {
                writeln!(out, "    (no phonemes)")?;
            } else {
                writeln!(out, "    {}", reading)?;
            }
        }
    }

    execute!(out, SetForegroundColor(Color::Yellow), Print("Phonemes: "), ResetColor)?;
    writeln!(out, "{}", engine.primary_phonemes(text))?;
    Ok(())
}
