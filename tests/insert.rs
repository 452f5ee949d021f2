/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate isrt_assert_close;

mod shared;

use isrt_structure::consts::FLUORINE;
use isrt_structure::periodic::min_image_distance;
use isrt_structure_io::StructureFileType;
use isrt_tasks::{run_insert, read_structure};

use path_abs::FileRead;
use tempdir::TempDir;

const NUM_ORIGINAL: usize = 24;

#[test]
fn inserts_into_poscar() {
    let dir = TempDir::new("isrt").unwrap();
    let input = shared::resource("slab-water.vasp");
    let output = dir.path().join("POSCAR_00");
    let summary = dir.path().join("summary.json");

    let settings = shared::settings(&[]);
    let placement = run_insert(&settings, &input, &output, None, Some(summary.as_path())).unwrap();
    assert!(placement.is_complete());
    assert_close!(abs=1e-9, placement.window.z.lo, 6.6 + 2.0);
    assert_close!(abs=1e-9, placement.window.z.hi, 13.8 - 0.5);

    let original = read_structure(&input).unwrap();
    let result = read_structure(&output).unwrap();
    assert_eq!(result.elements.len(), NUM_ORIGINAL + 3);
    assert_eq!(&result.elements[..NUM_ORIGINAL], &original.elements[..]);
    assert_eq!(&result.elements[NUM_ORIGINAL..], &[FLUORINE; 3]);
    assert_close!(abs=1e-9, result.coords.lattice(), original.coords.lattice());

    // the original atoms are untouched
    let carts = result.coords.to_carts();
    assert_close!(abs=1e-6, carts[..NUM_ORIGINAL].to_vec(), original.coords.to_carts());

    let lattice = result.coords.lattice();
    for i in NUM_ORIGINAL..carts.len() {
        let z = carts[i][2];
        assert!(8.6 - 1e-6 <= z && z <= 13.3 + 1e-6, "z = {}", z);
        for j in 0..i {
            let d = min_image_distance(lattice, &carts[i], &carts[j]);
            assert!(d >= 1.8 - 1e-6, "atoms {} and {} are {} apart", i, j, d);
        }
    }

    let json: serde_json::Value = serde_json::from_reader(FileRead::open(&summary).unwrap()).unwrap();
    assert_eq!(json["element"], "F");
    assert_eq!(json["requested"], 3);
    assert_eq!(json["accepted"], 3);
    assert_eq!(json["shortfall"], 0);
    assert_eq!(json["positions"].as_array().unwrap().len(), 3);
    assert_close!(abs=1e-9, json["window"]["z"][0].as_f64().unwrap(), 8.6);
    assert_eq!(json["settings"]["insert"]["min-distance"], 1.8);
}

#[test]
fn seeded_runs_match() {
    let dir = TempDir::new("isrt").unwrap();
    let input = shared::resource("slab-water.vasp");
    let settings = shared::settings(&["insert.seed: 7"]);

    for name in &["a.vasp", "b.vasp"] {
        run_insert(&settings, &input, &dir.path().join(name), None, None).unwrap();
    }
    assert_eq!(
        shared::read_text(dir.path().join("a.vasp")),
        shared::read_text(dir.path().join("b.vasp")),
    );

    let other = shared::settings(&["insert.seed: 8"]);
    run_insert(&other, &input, &dir.path().join("c.vasp"), None, None).unwrap();
    assert_ne!(
        shared::read_text(dir.path().join("a.vasp")),
        shared::read_text(dir.path().join("c.vasp")),
    );
}

#[test]
fn empty_window() {
    let dir = TempDir::new("isrt").unwrap();
    let input = shared::resource("slab-water.vasp");
    let output = dir.path().join("POSCAR_00");

    // the window would end 4.8 above the origin, below the top of the slab
    let settings = shared::settings(&["insert.dist-from-high: 9.0"]);
    let placement = run_insert(&settings, &input, &output, None, None).unwrap();
    assert_eq!(placement.accepted.len(), 0);
    assert_eq!(placement.attempts, 0);
    assert_eq!(placement.shortfall(), 3);
    assert_eq!(read_structure(&output).unwrap().elements.len(), NUM_ORIGINAL);

    let strict = shared::settings(&["insert.dist-from-high: 9.0", "insert.fail-on-shortfall: true"]);
    let err = run_insert(&strict, &input, &output, None, None).unwrap_err();
    assert!(err.to_string().contains("could not place 3 of 3"), "{}", err);
}

#[test]
fn missing_reference_group() {
    let dir = TempDir::new("isrt").unwrap();
    let input = shared::resource("slab-water.vasp");
    let output = dir.path().join("POSCAR_00");

    let settings = shared::settings(&["insert.high-species: [Xe]"]);
    let err = run_insert(&settings, &input, &output, None, None).unwrap_err();
    assert!(err.to_string().contains("reference-high"), "{}", err);
    assert!(!output.exists());
}

#[test]
fn extended_xyz_output() {
    let dir = TempDir::new("isrt").unwrap();
    let input = shared::resource("slab-water.vasp");

    let settings = shared::settings(&[]);
    let guessed = dir.path().join("out.extxyz");
    run_insert(&settings, &input, &guessed, None, None).unwrap();

    let text = shared::read_text(&guessed);
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "27");
    assert!(lines[1].starts_with("Lattice=\"10 0 0 0 10 0 0 0 25\""), "{}", lines[1]);
    assert_eq!(lines.len(), 2 + 27);
    assert!(lines[26].trim_start().starts_with("F "));

    // an explicit format wins over the file name
    let forced = dir.path().join("out.vasp");
    run_insert(&settings, &input, &forced, Some(StructureFileType::Xyz), None).unwrap();
    assert_eq!(shared::read_text(&forced).lines().count(), 2 + 27);
}

#[test]
fn fixed_atoms_stay_fixed() {
    let dir = TempDir::new("isrt").unwrap();
    let input = shared::resource("slab-fixed.vasp");
    let output = dir.path().join("POSCAR_00");

    let settings = shared::settings(&[]);
    run_insert(&settings, &input, &output, None, None).unwrap();

    let original = read_structure(&input).unwrap();
    let result = read_structure(&output).unwrap();
    let before = original.dynamics.unwrap();
    let after = result.dynamics.unwrap();

    assert_eq!(before.len(), NUM_ORIGINAL);
    assert_eq!(&before[..4], &[[false; 3]; 4]);
    assert_eq!(&after[..NUM_ORIGINAL], &before[..]);
    assert_eq!(&after[NUM_ORIGINAL..], &[[true; 3]; 3]);

    let text = shared::read_text(&output);
    assert!(text.contains("Selective Dynamics"), "{}", text);
}
