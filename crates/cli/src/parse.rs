use dotnetdomain_api::ConstructKind;
use dotnetdomain_core::parser;

pub fn run(kind: ConstructKind, raw: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let signature = match parser::parse(raw, kind) {
        Ok(signature) => signature,
        Err(e) => {
            eprintln!("WARNING: {} ({})", e, e.reason);
            return Err(e.into());
        }
    };

    if json {
        let value = serde_json::json!({
            "kind": kind,
            "prefix": signature.prefix(),
            "member": signature.member(),
            "arguments": signature.arguments(),
            "full_name": signature.full_name(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Kind:      {}", kind);
    println!("Prefix:    {}", signature.prefix().unwrap_or("-"));
    println!("Member:    {}", signature.member());
    match signature.arguments() {
        Some(args) => println!("Arguments: ({})", args.join(", ")),
        None => println!("Arguments: -"),
    }
    println!("Full name: {}", signature.full_name());
    Ok(())
}
