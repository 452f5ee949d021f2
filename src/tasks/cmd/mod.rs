/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Implementations of the commands behind each binary.

use crate::FailResult;
use crate::ui::color::paint;

use std::path::Path;

use ansi_term::Colour;
use failure::ResultExt;
use path_abs::{FileRead, FileWrite};
use rand::{SeedableRng, StdRng};

use isrt_array_types::Unvee;
use isrt_insert::{self as insert, Placement, Request, SpeciesSet, Interval};
use isrt_structure::{Coords, Element};
use isrt_structure_io::{Poscar, PoscarCoords, Xyz, ExtXyz, StructureFileType};
use isrt_tasks_config::{Settings, InsertSettings, CoordsChoice};

/// A structure as read from (or written to) a file.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureData {
    pub comment: String,
    pub coords: Coords,
    pub elements: Vec<Element>,
    /// `Selective dynamics` flags, when the POSCAR had them.
    pub dynamics: Option<Vec<[bool; 3]>>,
}

/// Read a POSCAR.
pub fn read_structure(path: &Path) -> FailResult<StructureData>
{
    let file = FileRead::open(path)?;
    let Poscar { comment, coords, elements, dynamics } = {
        Poscar::from_reader(file)
            .with_context(|_| format!("could not read POSCAR from {}", path.display()))?
    };
    debug!("Read {} atoms from {}", coords.num_atoms(), path.display());
    Ok(StructureData { comment, coords, elements, dynamics })
}

/// Write a structure, or append a frame to an XYZ trajectory.
pub fn write_structure(
    path: &Path,
    file_type: StructureFileType,
    data: &StructureData,
    coords_choice: CoordsChoice,
    append: bool,
) -> FailResult<()>
{
    let open = || -> FailResult<FileWrite> {
        Ok(match append {
            true => FileWrite::open_append(path)?,
            false => FileWrite::create(path)?,
        })
    };

    match file_type {
        StructureFileType::Poscar => {
            ensure!(!append, "cannot append to a POSCAR (only xyz and extxyz hold multiple frames)");
            let kind = match coords_choice {
                CoordsChoice::Frac => PoscarCoords::Frac,
                CoordsChoice::Cart => PoscarCoords::Cart,
            };
            Poscar {
                comment: &data.comment,
                coords: &data.coords,
                elements: &data.elements,
                dynamics: data.dynamics.clone(),
            }.to_writer_as(open()?, kind)?;
        },
        StructureFileType::Xyz => {
            Xyz {
                title: data.comment.lines().next().unwrap_or(""),
                carts: data.coords.to_carts(),
                elements: &data.elements,
            }.to_writer(open()?)?;
        },
        StructureFileType::ExtXyz => {
            ExtXyz {
                coords: &data.coords,
                elements: &data.elements,
                info: vec![],
            }.to_writer(open()?)?;
        },
    }
    Ok(())
}

fn resolve_output_type(path: &Path, explicit: Option<StructureFileType>) -> StructureFileType
{
    explicit.or_else(|| StructureFileType::guess(path)).unwrap_or_else(|| {
        info!("Could not guess the format of {}; writing a POSCAR.", path.display());
        StructureFileType::Poscar
    })
}

//--------------------------------------------------------

fn request_from_settings(settings: &InsertSettings) -> Request
{
    Request {
        element: settings.element,
        count: settings.count,
        min_distance: settings.min_distance,
        max_iterations: settings.max_iterations,
        dist_from_low: settings.dist_from_low,
        dist_from_high: settings.dist_from_high,
    }
}

fn make_rng(seed: Option<u64>) -> FailResult<StdRng>
{
    Ok(match seed {
        Some(seed) => {
            info!("Using random seed {}.", seed);
            StdRng::from_seed(&[seed as usize, (seed >> 32) as usize][..])
        },
        None => StdRng::new().context("could not seed the random number generator from the OS")?,
    })
}

/// Insert atoms into the structure at `input` and write the result to `output`.
///
/// Returns the placement so that callers can inspect the shortfall.
pub fn run_insert(
    settings: &Settings,
    input: &Path,
    output: &Path,
    output_type: Option<StructureFileType>,
    summary: Option<&Path>,
) -> FailResult<Placement>
{
    debug!("Effective config:\n{}", isrt_tasks_config::to_yaml_string(settings)?);

    let mut data = read_structure(input)?;
    info!("Read {} atoms from {}.", data.coords.num_atoms(), input.display());

    let request = request_from_settings(&settings.insert);
    let classifier = SpeciesSet::new(settings.insert.high_species.iter().cloned());
    let mut rng = make_rng(settings.insert.seed)?;

    let placement = insert::place(&data.coords, &data.elements, &classifier, &request, &mut rng)?;
    insert::insert(&mut data.coords, &mut data.elements, &placement)?;
    if let Some(dynamics) = data.dynamics.as_mut() {
        // new atoms are free to relax
        dynamics.extend(placement.accepted.iter().map(|_| [true; 3]));
    }

    let style = match placement.is_complete() {
        true => Colour::Green.bold(),
        false => Colour::Red.bold(),
    };
    info!(
        "{} atoms successfully added: {}",
        placement.element, paint(style, placement.accepted.len()),
    );

    let output_type = resolve_output_type(output, output_type);
    write_structure(output, output_type, &data, settings.output.coords, false)
        .with_context(|_| format!("could not write {}", output.display()))?;
    info!("Modified structure saved to {}", output.display());

    if let Some(path) = summary {
        write_summary(path, settings, input, output, &placement)?;
        info!("Summary saved to {}", path.display());
    }

    if settings.insert.fail_on_shortfall && !placement.is_complete() {
        bail!(
            "could not place {} of {} {} atoms (fail-on-shortfall is set)",
            placement.shortfall(), placement.requested, placement.element,
        );
    }
    Ok(placement)
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct InsertSummary<'a> {
    input: &'a Path,
    output: &'a Path,
    element: Element,
    requested: usize,
    accepted: usize,
    shortfall: usize,
    attempts: usize,
    window: WindowSummary,
    positions: Vec<[f64; 3]>,
    settings: &'a Settings,
}

#[derive(Serialize)]
struct WindowSummary {
    x: (f64, f64),
    y: (f64, f64),
    z: (f64, f64),
}

fn write_summary(
    path: &Path,
    settings: &Settings,
    input: &Path,
    output: &Path,
    placement: &Placement,
) -> FailResult<()>
{
    let bounds = |i: Interval| (i.lo, i.hi);
    let summary = InsertSummary {
        input,
        output,
        element: placement.element,
        requested: placement.requested,
        accepted: placement.accepted.len(),
        shortfall: placement.shortfall(),
        attempts: placement.attempts,
        window: WindowSummary {
            x: bounds(placement.window.x),
            y: bounds(placement.window.y),
            z: bounds(placement.window.z),
        },
        positions: placement.accepted.clone().unvee(),
        settings,
    };
    let file = FileWrite::create(path)?;
    serde_json::to_writer_pretty(file, &summary)
        .with_context(|_| format!("could not write {}", path.display()))?;
    Ok(())
}

//--------------------------------------------------------

/// Rewrite the POSCAR at `input` in another format.
pub fn run_convert(
    input: &Path,
    output: &Path,
    output_type: Option<StructureFileType>,
    append: bool,
) -> FailResult<()>
{
    let data = read_structure(input)?;
    let output_type = resolve_output_type(output, output_type);
    write_structure(output, output_type, &data, CoordsChoice::default(), append)
        .with_context(|_| format!("could not write {}", output.display()))?;

    match append {
        true => info!("Appended {} atoms to {} ({})", data.coords.num_atoms(), output.display(), output_type),
        false => info!("Wrote {} atoms to {} ({})", data.coords.num_atoms(), output.display(), output_type),
    }
    Ok(())
}
