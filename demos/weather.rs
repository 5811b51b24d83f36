//! An example using the `weather` dataset
use infotree::reader::read_csv;
use infotree::tree::write_rules;
use infotree::TreeBuilder;
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("resources/weather.csv");

    let table = read_csv(path)?;
    let tree = TreeBuilder::default().fit(&table)?;

    let mut rules = String::new();
    write_rules(&mut rules, &tree, table.class_header())?;
    print!("{}", rules);
    println!();
    print!("{}", tree);

    Ok(())
}
