//! Integration tests for the estimate pipeline.
//!
//! These tests verify the end-to-end flow:
//! 1. A mission document is read from disk (JSON or YAML)
//! 2. The handler costs it
//! 3. The cost report is written back as a JSON document
//!
//! File tests run in temporary directories; in-memory tests need no disk.

use std::sync::Arc;

use serde_json::Value;
use tempfile::TempDir;

use constellation_cost::adapters::{FileDocumentStorage, InMemoryDocumentStorage};
use constellation_cost::application::{
    EstimateCostCommand, EstimateCostError, EstimateCostHandler,
};
use constellation_cost::domain::costing::Diagnostic;
use constellation_cost::domain::mission::MissionRequest;
use constellation_cost::ports::{DocumentPath, StorageError};

// =============================================================================
// Test Infrastructure
// =============================================================================

const MISSION: &str = r#"{
    "constellation": {
        "designLife": 60,
        "spacecraft": [
            {
                "stabilizationType": "3-axis",
                "totalDryMass": 150,
                "propellantMass": 10,
                "beginLifePower": 400,
                "endLifePower": 320,
                "pointingAccuracy": 0.1,
                "incl": 53,
                "techReadinessLevel": 7,
                "payload": [{"name": "Optical/Imager", "totalMass": 25, "peakPower": 60}]
            },
            {
                "stabilizationType": "3-axis",
                "totalDryMass": 150,
                "propellantMass": 10,
                "beginLifePower": 400,
                "endLifePower": 320,
                "pointingAccuracy": 0.1,
                "incl": 97.5,
                "RAAN": 120,
                "techReadinessLevel": "7",
                "payload": [{"name": "Optical/Imager", "totalMass": 25, "peakPower": 60}]
            },
            {
                "totalDryMass": 1400,
                "propellantMass": 200,
                "beginLifePower": 2500,
                "peakMaxPower": 3000,
                "incl": 53,
                "techReadinessLevel": 8,
                "payload": [{"name": "Active Microwave Instruments", "functionType": "SAR", "totalMass": 300, "peakPower": 900, "designLife": 60}]
            }
        ]
    },
    "context": {
        "missionDirector": "Commercial",
        "fiscalYear": 2017,
        "launch": {"vehicle": "Falcon 9", "totalNumber": 2},
        "groundStation": [{"lat": 38.9, "lon": -76.8, "isDesignated": true}]
    }
}"#;

const REPORT_KEYS: [&str; 9] = [
    "lifecycleCost",
    "hardwareCost",
    "iatCost",
    "programCost",
    "groundCost",
    "launchCost",
    "operationsCost",
    "nonRecurringCost",
    "recurringCost",
];

struct Workspace {
    _dir: TempDir,
    input: DocumentPath,
    output: DocumentPath,
}

impl Workspace {
    fn with_mission(file_name: &str, content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let input = DocumentPath::new(dir.path().join(file_name));
        let output = DocumentPath::new(dir.path().join("reports").join("cost.json"));
        std::fs::write(input.as_path(), content).unwrap();
        Self {
            _dir: dir,
            input,
            output,
        }
    }

    fn command(&self, strict: bool) -> EstimateCostCommand {
        EstimateCostCommand {
            input: self.input.clone(),
            output: self.output.clone(),
            strict,
        }
    }

    fn report(&self) -> Value {
        let content = std::fs::read_to_string(self.output.as_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}

fn file_handler() -> EstimateCostHandler {
    let storage = Arc::new(FileDocumentStorage::new().with_pretty(true));
    EstimateCostHandler::new(storage.clone(), storage)
}

// =============================================================================
// File round trip
// =============================================================================

#[tokio::test]
async fn json_mission_produces_report_document() {
    let ws = Workspace::with_mission("CostRisk.json", MISSION);

    let result = file_handler().handle(ws.command(false)).await.unwrap();
    let report = ws.report();

    for key in REPORT_KEYS {
        let cost = &report[key];
        assert!(cost["estimate"].is_number(), "{} has no estimate", key);
        assert!(cost["standardError"].is_number(), "{} has no error", key);
        assert_eq!(cost["fiscalYear"], 2017, "{} fiscal year", key);
    }
    assert!(report["lifecycleCost"]["estimate"].as_f64().unwrap() > 0.0);

    let ranks = report["spacecraftRank"].as_array().unwrap();
    assert_eq!(ranks.len(), 3);
    for entry in ranks {
        assert!(entry.get("inflationFactor").is_none());
        assert_eq!(entry["fiscalYear"], 2017);
    }
    assert_eq!(result.report.spacecraft_rank.len(), 3);
}

#[tokio::test]
async fn duplicate_spacecraft_rank_together() {
    let ws = Workspace::with_mission("CostRisk.json", MISSION);

    let result = file_handler().handle(ws.command(false)).await.unwrap();

    // The two small spacecraft share a design and cost; the large one is last.
    let order: Vec<usize> = result
        .report
        .spacecraft_rank
        .iter()
        .map(|r| r.spacecraft_index)
        .collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert_eq!(
        result.report.spacecraft_rank[0].total_cost,
        result.report.spacecraft_rank[1].total_cost
    );
}

#[tokio::test]
async fn yaml_mission_matches_json_mission() {
    let request: MissionRequest = serde_json::from_str(MISSION).unwrap();
    let yaml = serde_yaml::to_string(&request).unwrap();

    let json_ws = Workspace::with_mission("mission.json", MISSION);
    let yaml_ws = Workspace::with_mission("mission.yml", &yaml);

    let from_json = file_handler().handle(json_ws.command(false)).await.unwrap();
    let from_yaml = file_handler().handle(yaml_ws.command(false)).await.unwrap();

    assert_eq!(from_json.report, from_yaml.report);
}

#[tokio::test]
async fn strict_mode_leaves_no_report_behind() {
    let mission = MISSION.replace("Falcon 9", "Saturn V");
    let ws = Workspace::with_mission("CostRisk.json", &mission);

    let err = file_handler().handle(ws.command(true)).await.unwrap_err();

    assert!(matches!(err, EstimateCostError::UnresolvedInputs { count: 1, .. }));
    assert!(!ws.output.as_path().exists());
}

#[tokio::test]
async fn lenient_mode_reports_defaults() {
    let mission = MISSION
        .replace("Falcon 9", "Saturn V")
        .replace("Active Microwave Instruments", "Magnetometer");
    let ws = Workspace::with_mission("CostRisk.json", &mission);

    let result = file_handler().handle(ws.command(false)).await.unwrap();
    let diagnostics = result.diagnostics.into_vec();

    assert!(diagnostics.contains(&Diagnostic::UnknownLaunchVehicle {
        name: "Saturn V".into()
    }));
    assert!(diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::UnmatchedPayloadType { spacecraft_index: 2, .. })));
    assert!(ws.output.as_path().exists());
}

#[tokio::test]
async fn malformed_mission_is_rejected() {
    let ws = Workspace::with_mission("CostRisk.json", "{\"constellation\": [");

    let err = file_handler().handle(ws.command(false)).await.unwrap_err();

    assert!(matches!(
        err,
        EstimateCostError::Storage(StorageError::Malformed { .. })
    ));
}

// =============================================================================
// In-memory adapters
// =============================================================================

#[tokio::test]
async fn in_memory_run_matches_file_run() {
    let ws = Workspace::with_mission("CostRisk.json", MISSION);
    let from_file = file_handler().handle(ws.command(false)).await.unwrap();

    let storage = Arc::new(InMemoryDocumentStorage::new());
    storage
        .insert_mission("mission", serde_json::from_str(MISSION).unwrap())
        .await;
    let handler = EstimateCostHandler::new(storage.clone(), storage.clone());
    let from_memory = handler
        .handle(EstimateCostCommand {
            input: "mission".into(),
            output: "report".into(),
            strict: false,
        })
        .await
        .unwrap();

    assert_eq!(from_file.report, from_memory.report);
    assert_eq!(
        storage.report(&"report".into()).await,
        Some(from_memory.report)
    );
}
