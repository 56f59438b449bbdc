use std::io::Write;
use std::path::Path;

use approx::assert_relative_eq;
use chem_domain::{CatalogEntry, DescriptorSet, MatchType, Query};
use drugrank_rust::data::Catalog;
use drugrank_rust::errors::PipelineError;
use drugrank_rust::providers::{FixedResolver, FixedToolkit, IndexResolver, NameResolver};
use drugrank_rust::workflow::{DescriptorErrorPolicy, DrugPropertyPipeline, PipelineOptions};

fn descriptors(mw: f64, log_p: f64, hbd: u32, hba: u32) -> DescriptorSet {
    DescriptorSet { hba,
                    hbd,
                    tpsa: 50.0,
                    avg_molecular_weight: mw,
                    aromatic_rings: 1,
                    chiral_centres: 0,
                    heavy_atoms: 13,
                    log_p,
                    refractivity: 45.0 }
}

fn entry(id: &str, name: &str, smiles: &str) -> CatalogEntry {
    CatalogEntry { canonical_id: id.into(),
                   canonical_name: name.into(),
                   structure: smiles.into(),
                   known_targets: String::new() }
}

#[test]
fn test_single_matched_name_produces_single_row() {
    let resolver = FixedResolver::new().with("aspirin", "CHEMBL25", MatchType::Exact);
    let catalog = Catalog::from_entries(vec![entry("CHEMBL25", "ASPIRIN", "CC(=O)Oc1ccccc1C(=O)O")]);
    let toolkit = FixedToolkit::new().with("CC(=O)Oc1ccccc1C(=O)O", descriptors(180.0, 1.5, 1, 2));
    let pipeline = DrugPropertyPipeline::new(resolver, catalog, toolkit, PipelineOptions::default());

    let report = pipeline.run(&["aspirin", "not-a-drug"]).unwrap();
    assert_eq!(report.records.len(), 1);
    let row = &report.records[0];
    assert_eq!(row.canonical_id(), "CHEMBL25");
    assert!(row.evaluated.flags.passes_rule_of_three);
    assert!(row.evaluated.flags.passes_rule_of_five);
    // 0.64 + 1.0 + 0.8 + 0.8
    assert_relative_eq!(row.score(), 3.24, epsilon = 1e-12);
    assert_eq!(row.rank, 1);
}

#[test]
fn test_ties_share_rank_without_gaps() {
    let resolver = FixedResolver::new().with("a", "ID_A", MatchType::Exact)
                                       .with("b", "ID_B", MatchType::Exact)
                                       .with("c", "ID_C", MatchType::Fuzzy)
                                       .with("d", "ID_D", MatchType::Exact);
    let catalog = Catalog::from_entries(vec![entry("ID_A", "A", "SA"),
                                             entry("ID_B", "B", "SB"),
                                             entry("ID_C", "C", "SC"),
                                             entry("ID_D", "D", "SD")]);
    // mismas entradas para B y C -> misma puntuación
    let toolkit = FixedToolkit::new().with("SA", descriptors(100.0, 1.5, 0, 0))
                                     .with("SB", descriptors(300.0, 3.0, 2, 5))
                                     .with("SC", descriptors(300.0, 3.0, 2, 5))
                                     .with("SD", descriptors(490.0, 6.0, 5, 10));
    let pipeline = DrugPropertyPipeline::new(resolver, catalog, toolkit, PipelineOptions::default());
    let report = pipeline.run(&["d", "c", "b", "a"]).unwrap();
    let got: Vec<(&str, u32)> = report.records.iter().map(|r| (r.canonical_id(), r.rank)).collect();
    assert_eq!(got, vec![("ID_A", 1), ("ID_C", 2), ("ID_B", 2), ("ID_D", 3)]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let resolver = IndexResolver::fit(vec![("ASPIRIN", "CHEMBL25"), ("IBRUTINIB", "CHEMBL1873475")]);
    let catalog = Catalog::from_entries(vec![entry("CHEMBL25", "ASPIRIN", "ASP"), entry("CHEMBL1873475", "IBRUTINIB", "IBR")]);
    let toolkit = FixedToolkit::new().with("ASP", descriptors(180.16, 1.31, 1, 3))
                                     .with("IBR", descriptors(440.51, 3.68, 1, 7));
    for parallel in [false, true] {
        let options = PipelineOptions { on_descriptor_error: DescriptorErrorPolicy::Abort,
                                        parallel };
        let pipeline = DrugPropertyPipeline::new(resolver.clone(), catalog.clone(), toolkit.clone(), options);
        let names = ["ibrutinb", "Aspirin", "unknown"];
        let first = pipeline.run(&names).unwrap();
        let second = pipeline.run(&names).unwrap();
        assert_eq!(first.fingerprint, second.fingerprint);
        let scores = |r: &drugrank_rust::workflow::PipelineReport| {
            r.records.iter().map(|x| (x.score().to_bits(), x.rank)).collect::<Vec<_>>()
        };
        assert_eq!(scores(&first), scores(&second));
        assert_eq!(first.records.len(), 2);
    }
}

#[test]
fn test_filtering_is_monotone() {
    let resolver = IndexResolver::fit(vec![("ADENOSINE", "CHEMBL477"), ("Adenocard", "CHEMBL477"), ("GHOST", "CHEMBL000")]);
    let catalog = Catalog::from_entries(vec![entry("CHEMBL477", "ADENOSINE", "ADO")]);
    let toolkit = FixedToolkit::new().with("ADO", descriptors(267.24, -1.98, 4, 8));
    let names = ["Adenosine", "Adenocard", "BG8967", "ghost", ""];
    let queries: Vec<Query> = names.iter().map(|n| Query::from(*n)).collect();
    let results = resolver.resolve_all(&queries);
    assert_eq!(results.len(), names.len());

    let pipeline = DrugPropertyPipeline::new(resolver, catalog, toolkit, PipelineOptions::default());
    let report = pipeline.run(&names).unwrap();
    let c = report.counts;
    assert_eq!(c.queries, 5);
    assert_eq!(c.resolved, 3);
    assert_eq!(c.joined, 2);
    assert!(c.joined <= c.resolved && c.resolved <= c.queries);
    assert!(report.records.iter().all(|r| r.rank == 1));
}

#[test]
fn test_invalid_structure_aborts_or_skips() {
    let resolver = FixedResolver::new().with("good", "G", MatchType::Exact).with("bad", "B", MatchType::Exact);
    let catalog = Catalog::from_entries(vec![entry("G", "GOOD", "OK"), entry("B", "BAD", "C1CC(")]);
    let toolkit = FixedToolkit::new().with("OK", descriptors(200.0, 1.2, 1, 1));

    let abort = DrugPropertyPipeline::new(resolver.clone(), catalog.clone(), toolkit.clone(), PipelineOptions::default());
    match abort.run(&["good", "bad"]) {
        Err(PipelineError::Descriptor(e)) => assert_eq!(e.canonical_id, "B"),
        other => panic!("se esperaba error de descriptores, obtenido {other:?}"),
    }

    let skip = DrugPropertyPipeline::new(resolver,
                                         catalog,
                                         toolkit,
                                         PipelineOptions { on_descriptor_error: DescriptorErrorPolicy::Skip,
                                                           parallel: false });
    let report = skip.run(&["good", "bad"]).unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.counts.skipped, 1);
}

#[test]
fn test_generate_drug_info_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("result.csv");
    let resolver = FixedResolver::new().with("aspirin", "CHEMBL25", MatchType::Exact);
    let catalog = Catalog::from_entries(vec![entry("CHEMBL25", "ASPIRIN", "ASP")]);
    let toolkit = FixedToolkit::new().with("ASP", descriptors(400.0, 2.0, 2, 4));
    let pipeline = DrugPropertyPipeline::new(resolver, catalog, toolkit, PipelineOptions::default());

    let msg = pipeline.generate_drug_info(&["aspirin"], &out).unwrap();
    assert!(msg.contains("result.csv"));
    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    let score: f64 = rows[0][17].parse().unwrap();
    assert_relative_eq!(score, 2.4, epsilon = 1e-12);
    assert_eq!(&rows[0][18], "1");
}

#[test]
fn test_generate_drug_info_writes_excel() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("result.xlsx");
    let resolver = FixedResolver::new().with("aspirin", "CHEMBL25", MatchType::Exact);
    let catalog = Catalog::from_entries(vec![entry("CHEMBL25", "ASPIRIN", "ASP")]);
    let toolkit = FixedToolkit::new().with("ASP", descriptors(400.0, 2.0, 2, 4));
    let pipeline = DrugPropertyPipeline::new(resolver, catalog, toolkit, PipelineOptions::default());

    let msg = pipeline.generate_drug_info(&["aspirin"], &out).unwrap();
    assert!(msg.contains("result.xlsx"));
    assert!(std::fs::read(&out).unwrap().starts_with(b"PK"));
}

#[test]
fn test_generate_drug_info_unwritable_destination() {
    let resolver = FixedResolver::new();
    let pipeline = DrugPropertyPipeline::new(resolver, Catalog::default(), FixedToolkit::new(), PipelineOptions::default());
    let dest = Path::new("/nonexistent-dir/drugrank/result.csv");
    match pipeline.generate_drug_info(&["x"], dest) {
        Err(PipelineError::Export(e)) => assert_eq!(e.path, dest),
        other => panic!("se esperaba error de exportación, obtenido {other:?}"),
    }
}

#[test]
fn test_catalog_from_file_drives_pipeline() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "ChEMBL ID;Name;Smiles;Targets").unwrap();
    writeln!(f, "CHEMBL25;ASPIRIN;ASP;Cyclooxygenase-1").unwrap();
    let catalog = Catalog::from_path(f.path(), b';').unwrap();
    let resolver = IndexResolver::fit(catalog.name_index());
    let toolkit = FixedToolkit::new().with("ASP", descriptors(180.0, 1.5, 1, 2));
    let pipeline = DrugPropertyPipeline::new(resolver, catalog, toolkit, PipelineOptions::default());
    let report = pipeline.run(&["Aspirin", "chembl25"]).unwrap();
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].evaluated.joined.known_targets, "Cyclooxygenase-1");
    assert!(report.records.iter().all(|r| r.evaluated.joined.match_type == MatchType::Exact));
}
