use crate::*;

pub fn handle_content_commands(cli: &Cli, command: &ContentCommands) -> anyhow::Result<()> {
    let scan = ContentScanConfig::default();

    match command {
        ContentCommands::Show => {
            if cli.json {
                print_json(true, &scan)?;
            } else {
                for pattern in &scan.content {
                    println!("content\t{}", pattern);
                }
                for (token, stack) in &scan.theme.extend.font_family {
                    println!("fontFamily.{}\t{}", token, stack.join(", "));
                }
                println!(
                    "future\tpurgeLayersByDefault={} removeDeprecatedGapUtilities={}",
                    scan.future.purge_layers_by_default,
                    scan.future.remove_deprecated_gap_utilities
                );
            }
        }
        ContentCommands::Files => {
            let files: Vec<String> = scan
                .expand(&cli.root)?
                .iter()
                .map(|p| {
                    p.strip_prefix(&cli.root)
                        .unwrap_or(p)
                        .to_string_lossy()
                        .replace('\\', "/")
                })
                .collect();
            print_out(cli.json, &files, |f| f.clone())?;
        }
        ContentCommands::Export { out } => {
            let path = out
                .clone()
                .unwrap_or_else(|| cli.root.join(GENERATOR_CONFIG_FILE));
            let bytes = export_module(&scan, &path)?;
            let report = ExportReport {
                path: path.to_string_lossy().to_string(),
                bytes,
            };
            print_one(cli.json, report, |r| format!("wrote {}", r.path))?;
        }
    }

    Ok(())
}
