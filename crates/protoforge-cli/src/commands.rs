//! Subcommand handlers

use crate::config::ProtoforgeConfig;
use anyhow::Context;
use clap::ArgMatches;
use protoforge_document::DocumentWriter;
use protoforge_import::RsiImporter;
use protoforge_model::Prototype;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Dispatch a parsed subcommand, writing user-facing output to `out`
pub(crate) fn run(
    name: &str,
    args: &ArgMatches,
    config: &ProtoforgeConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let importer = RsiImporter::with_settings(config.import.clone());
    let writer = DocumentWriter::with_settings(config.document);
    let styleguide =
        matches!(name, "import" | "append" | "show") && args.get_flag("styleguide-order");

    match name {
        "import" => {
            let folder = required_path(args, "folder")?;
            let target = required_path(args, "into")?;
            let prototypes = import_folder(&importer, folder, styleguide)?;
            append(&writer, target, &prototypes, out)
        }
        "append" => {
            let target = required_path(args, "into")?;
            let mut prototypes = Vec::new();
            for bundle in args.get_many::<PathBuf>("bundles").into_iter().flatten() {
                let mut prototype = importer
                    .import_bundle(bundle)
                    .with_context(|| format!("importing {}", bundle.display()))?;
                if styleguide {
                    prototype.sort_components_by_styleguide();
                }
                prototypes.push(prototype);
            }
            append(&writer, target, &prototypes, out)
        }
        "format" => {
            let document = required_path(args, "document")?;
            let changed = writer
                .format_file(document)
                .with_context(|| format!("formatting {}", document.display()))?;
            if changed {
                tracing::info!(path = %document.display(), "records separated");
            }
            Ok(())
        }
        "show" => {
            let folder = required_path(args, "folder")?;
            let prototypes = import_folder(&importer, folder, styleguide)?;
            let records: Vec<_> = prototypes.iter().map(Prototype::to_yaml_value).collect();
            let text = writer.render(&records).context("rendering records")?;
            out.write_all(text.as_bytes()).context("writing records")
        }
        other => anyhow::bail!("unknown subcommand: {other}"),
    }
}

fn required_path<'a>(args: &'a ArgMatches, id: &str) -> anyhow::Result<&'a Path> {
    args.get_one::<PathBuf>(id)
        .map(PathBuf::as_path)
        .with_context(|| format!("missing argument '{id}'"))
}

fn import_folder(
    importer: &RsiImporter,
    folder: &Path,
    styleguide: bool,
) -> anyhow::Result<Vec<Prototype>> {
    let mut prototypes = importer
        .import_folder(folder)
        .with_context(|| format!("importing bundles from {}", folder.display()))?;
    if styleguide {
        prototypes
            .iter_mut()
            .for_each(Prototype::sort_components_by_styleguide);
    }
    Ok(prototypes)
}

fn append(
    writer: &DocumentWriter,
    target: &Path,
    prototypes: &[Prototype],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = writer
        .append(target, prototypes)
        .with_context(|| format!("appending to {}", target.display()))?;
    writeln!(
        out,
        "appended {} prototype(s) to {} ({} total)",
        report.appended,
        target.display(),
        report.total()
    )
    .context("writing summary")
}
