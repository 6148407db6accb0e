use crate::BuildArgs;
use crate::build::build_documents;
use dotnetdomain_api::ConstructKind;

pub fn run(
    args: &BuildArgs,
    name: &str,
    kinds: &[ConstructKind],
) -> Result<(), Box<dyn std::error::Error>> {
    let report = build_documents(args, args.resolve_config()?)?;
    let all = ConstructKind::ALL;
    let kinds = if kinds.is_empty() {
        &all[..]
    } else {
        kinds
    };

    match report.registry.resolve(name, kinds) {
        Some((kind, target)) => {
            println!("{} {} -> {}", kind, name, target);
            Ok(())
        }
        None => Err(format!("No reference target named \"{}\"", name).into()),
    }
}
