//! Prints the default gas.js snippet and a customised cross-domain variant.

use gas_tag::gas::{CallArgs, GasTag};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", GasTag::defaults("UA-2222-2", ".example.com")?);
    println!();

    let mut tag = GasTag::new();
    tag.add_account("UA-1111-1", None)?;
    tag.add_account("UA-3333-3", Some("rollup"))?;
    tag.add_domains([".shop.example.com", ".blog.example.com"])?;
    tag.push("_trackPageview")?;
    tag.push_with("_gasTrackYoutube", CallArgs::options([("force", true)]))?;

    for statement in tag.statements() {
        println!("{} -> {}", statement.method(), statement);
    }
    println!("{}", tag.render());

    Ok(())
}
