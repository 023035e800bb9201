use std::env;
use std::process;

use unicode_char_finder::{codec, CharFinder, CharInfo, Direction, FinderOptions};

const USAGE: &str = "Usage: ucf <data-file> [--encoding LABEL] [--batch N] <command> [args]

Commands:
  info <char|U+hex>        Describe a character
  search <query> [--all]   Search descriptions (/regex/ supported)
  chart <char|U+hex>       Show the code chart page around a character
  next | prev <char|U+hex> Step to the adjacent character
  next-block | prev-block <char|U+hex>
                           Jump to the neighbouring block
  samples                  Describe the example characters
  stats                    Summarise the loaded data";

fn main() {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let mut options = FinderOptions::default().with_data_path(args.remove(0));
    if let Some(label) = take_flag_value(&mut args, "--encoding") {
        options = options.with_encoding(label);
    }
    if let Some(batch) = take_flag_value(&mut args, "--batch") {
        match batch.parse::<usize>() {
            Ok(size) => options = options.with_batch_size(size),
            Err(_) => fail(&format!("--batch expects a number, got {:?}", batch)),
        }
    }
    let show_all = take_flag(&mut args, "--all");

    let finder = match CharFinder::open(options) {
        Ok(finder) => finder,
        Err(e) => {
            eprintln!("ERROR: Failed to load character data");
            eprintln!("  {}", e);
            process::exit(1);
        }
    };

    let command = args.first().map(String::as_str).unwrap_or("stats");
    let operand = args.get(1).map(String::as_str);
    match command {
        "info" => print_info(&finder.char_info(codepoint_operand(operand))),
        "search" => run_search(&finder, operand.unwrap_or_default(), show_all),
        "chart" => print_chart(&finder, codepoint_operand(operand)),
        "next" | "prev" => {
            let direction = if command == "next" { Direction::Forward } else { Direction::Backward };
            match finder.step(codepoint_operand(operand), direction) {
                Some(cp) => print_info(&finder.char_info(cp)),
                None => println!("(no selection)"),
            }
        }
        "next-block" | "prev-block" => {
            let direction = if command == "next-block" { Direction::Forward } else { Direction::Backward };
            let cp = finder.block_step(codepoint_operand(operand), direction);
            print_info(&finder.char_info(cp));
        }
        "samples" => {
            for info in finder.samples() {
                println!("{}  {}  {}", info.code, info.character, info.description.as_deref().unwrap_or("-"));
            }
        }
        "stats" => {
            let store = finder.store();
            println!("Character data: {}", finder.options().data_path.display());
            println!("  Format: {:?}", store.variant());
            println!("  Assigned characters: {}", store.len());
            println!("  Reserved ranges: {}", store.ranges().len());
            println!("  Blocks: {}", store.blocks().len());
            println!("  Entities: {}", store.entities().len());
            println!("  Highest codepoint: U+{}", codec::dec_to_hex(store.max_codepoint(), 4));
        }
        other => fail(&format!("unknown command {:?}", other)),
    }
}

fn run_search(finder: &CharFinder, query: &str, show_all: bool) {
    let Some(mut session) = finder.start_search(query) else {
        println!("No results.");
        return;
    };
    loop {
        let batch = session.advance();
        for found in &batch.matches {
            let prefix = found.prefix.as_deref().map(|p| format!("[{}] ", p)).unwrap_or_default();
            let alias = found.alias.as_deref().map(|a| format!(" ({})", a)).unwrap_or_default();
            println!("U+{:<6} {}  {}{}{}", found.hex, found.character, prefix, found.description, alias);
        }
        if batch.done || !show_all {
            if !batch.done {
                println!("... more results available (use --all)");
            }
            break;
        }
    }
}

fn print_info(info: &CharInfo<'_>) {
    println!("Code point:   {}", info.code);
    println!("Character:    {}", info.character);
    if let Some(description) = &info.description {
        println!("Description:  {}", description);
    }
    if let Some(alias) = &info.alias {
        println!("Alias:        {}", alias);
    }
    if let Some(kind) = info.reserved_kind {
        println!("Reserved:     {}", kind);
    }
    println!("HTML entity:  {}", info.html_entity);
    if let Some(named) = &info.named_entity {
        println!("Named entity: {}", named);
    }
    println!("UTF-8:        {}", info.utf8_hex);
    println!("UTF-16:       {}", info.utf16_hex);
    if let Some(block) = info.block {
        println!("Block:        {} ({})", block.title, block.pdf_url);
    }
}

fn print_chart(finder: &CharFinder, cp: u32) {
    let page = finder.chart_for(cp);
    println!("Code chart from U+{}", codec::dec_to_hex(page.base, 4));
    for row in &page.rows {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let glyph = if cell.visible { codec::display_string(cell.codepoint) } else { "·".to_string() };
                if cell.current { format!("[{}]", glyph) } else { format!(" {} ", glyph) }
            })
            .collect();
        println!("U+{}  {}", codec::dec_to_hex(row[0].codepoint, 4), line.join(""));
    }
}

/// Reads `U+263A`, `0x263A`, a bare hex number or a single literal character.
fn codepoint_operand(operand: Option<&str>) -> u32 {
    let Some(arg) = operand else {
        fail("a character or U+hex codepoint is required");
    };
    let hex = arg
        .strip_prefix("U+")
        .or_else(|| arg.strip_prefix("u+"))
        .or_else(|| arg.strip_prefix("0x"));
    let parsed = match hex {
        Some(digits) => codec::hex_to_dec(digits).ok(),
        None if arg.chars().count() == 1 => codec::str_to_codepoint(arg),
        None => codec::hex_to_dec(arg).ok(),
    };
    parsed.unwrap_or_else(|| fail(&format!("not a character or codepoint: {:?}", arg)))
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    match args.iter().position(|arg| arg == flag) {
        Some(idx) => {
            args.remove(idx);
            true
        }
        None => false,
    }
}

fn take_flag_value(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let idx = args.iter().position(|arg| arg == flag)?;
    args.remove(idx);
    if idx < args.len() {
        Some(args.remove(idx))
    } else {
        fail(&format!("{} flag requires an argument", flag))
    }
}

fn fail(message: &str) -> ! {
    eprintln!("ERROR: {}", message);
    process::exit(1);
}
