//! Unit tests for rg-pipeline.

#[cfg(test)]
mod helpers {
    use std::path::PathBuf;

    use rg_core::{BoundingBox, OsmNodeId, OsmWayId};
    use rg_network::{
        EdgeAttrs, GraphProvider, NetworkError, NetworkResult, NetworkType, NodeAttrs, RoadGraph,
        RoadGraphBuilder,
    };
    use rg_output::{GraphSink, OutputError, OutputResult, SerializedGraph};

    /// Three nodes near Fort Pierce, FL.
    ///
    ///   Edges: 1→2, 2→1 residential @ 25 mph
    ///          2→3 twice (parallel), tertiary, no maxspeed (ways 20 and 21)
    pub fn florida_graph() -> RoadGraph {
        let mut b = RoadGraphBuilder::new();
        b.add_node(OsmNodeId(1), NodeAttrs { x: -80.5, y: 27.3 });
        b.add_node(OsmNodeId(2), NodeAttrs { x: -80.4, y: 27.4 });
        b.add_node(OsmNodeId(3), NodeAttrs { x: -80.3, y: 27.5 });

        let res = || EdgeAttrs::new(OsmWayId(10), 800.0).with_highway("residential").with_maxspeed("25 mph");
        b.add_edge(OsmNodeId(1), OsmNodeId(2), res()).unwrap();
        b.add_edge(OsmNodeId(2), OsmNodeId(1), res()).unwrap();
        b.add_edge(OsmNodeId(2), OsmNodeId(3), EdgeAttrs::new(OsmWayId(20), 1_000.0).with_highway("tertiary")).unwrap();
        b.add_edge(OsmNodeId(2), OsmNodeId(3), EdgeAttrs::new(OsmWayId(21), 1_100.0).with_highway("tertiary")).unwrap();
        b.build()
    }

    /// Provider that hands out a fixed graph untouched, or always fails.
    pub struct FixedProvider {
        pub graph:  Option<RoadGraph>,
        pub enrich: bool,
    }

    impl GraphProvider for FixedProvider {
        fn fetch(&self, bbox: BoundingBox, network: NetworkType) -> NetworkResult<RoadGraph> {
            self.graph
                .clone()
                .ok_or(NetworkError::EmptyRegion { bbox, network })
        }

        fn enrich(&self, graph: &mut RoadGraph) {
            if self.enrich {
                rg_network::add_edge_speeds(graph);
                rg_network::add_edge_travel_times(graph);
            }
        }
    }

    /// Sink that records what it was given and never touches disk.
    #[derive(Default)]
    pub struct CaptureSink {
        pub written: Vec<(String, SerializedGraph)>,
        pub fail:    bool,
    }

    impl GraphSink for CaptureSink {
        fn write(&mut self, graph: &SerializedGraph, destination: &str) -> OutputResult<PathBuf> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.written.push((destination.to_owned(), graph.clone()));
            Ok(PathBuf::from(destination))
        }
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod projection {
    use rg_core::{OsmNodeId, OsmWayId};
    use rg_network::{EdgeAttrs, NodeAttrs, RoadNetworkGraph};

    use crate::project;

    #[test]
    fn x_is_lon_and_y_is_lat() {
        let out = project(&super::helpers::florida_graph());
        let first = out.nodes[0];
        assert_eq!(first.id, OsmNodeId(1));
        assert_eq!(first.lat, 27.3);
        assert_eq!(first.lon, -80.5);
    }

    #[test]
    fn cardinality_and_order_preserved() {
        let g = super::helpers::florida_graph();
        let out = project(&g);
        assert_eq!(out.node_count(), g.node_count());
        assert_eq!(out.edge_count(), g.edge_count());

        let pairs: Vec<(i64, i64)> = out.edges.iter().map(|e| (e.source.0, e.target.0)).collect();
        assert_eq!(pairs, [(1, 2), (2, 1), (2, 3), (2, 3)]);
        assert_eq!(out.edges[2].distance, 1_000.0);
        assert_eq!(out.edges[3].distance, 1_100.0);
    }

    #[test]
    fn unenriched_edges_have_no_travel_time() {
        let out = project(&super::helpers::florida_graph());
        assert!(out.edges.iter().all(|e| e.travel_time.is_none()));
    }

    /// Any `RoadNetworkGraph` works, not only `RoadGraph`.
    struct TwoNodeLoop {
        nodes: [(OsmNodeId, NodeAttrs); 2],
        edge:  EdgeAttrs,
    }

    impl RoadNetworkGraph for TwoNodeLoop {
        fn nodes(&self) -> impl Iterator<Item = (OsmNodeId, &NodeAttrs)> {
            self.nodes.iter().map(|(id, a)| (*id, a))
        }

        fn edges(&self) -> impl Iterator<Item = (OsmNodeId, OsmNodeId, &EdgeAttrs)> {
            let (a, b) = (self.nodes[0].0, self.nodes[1].0);
            [(a, b, &self.edge), (b, a, &self.edge)].into_iter()
        }

        fn node_count(&self) -> usize { 2 }
        fn edge_count(&self) -> usize { 2 }
    }

    #[test]
    fn custom_graph_backend() {
        let mut edge = EdgeAttrs::new(OsmWayId(5), 50.0);
        edge.travel_time = Some(4.5);
        let g = TwoNodeLoop {
            nodes: [
                (OsmNodeId(-1), NodeAttrs { x: 1.0, y: 2.0 }),
                (OsmNodeId(-2), NodeAttrs { x: 3.0, y: 4.0 }),
            ],
            edge,
        };
        let out = project(&g);
        assert_eq!(out.nodes[1].lat, 4.0);
        assert_eq!(out.nodes[1].lon, 3.0);
        assert_eq!(out.edges.len(), 2);
        assert_eq!(out.edges[1].source, OsmNodeId(-2));
        assert_eq!(out.edges[1].travel_time, Some(4.5));
    }
}

// ── Extraction stages ─────────────────────────────────────────────────────────

#[cfg(test)]
mod stages {
    use rg_core::BoundingBox;
    use rg_network::{NetworkError, NetworkType};

    use super::helpers::{florida_graph, CaptureSink, FixedProvider};
    use crate::{extract_and_project, persist, PipelineError};

    #[test]
    fn enrichment_fills_travel_times() {
        let p = FixedProvider { graph: Some(florida_graph()), enrich: true };
        let out = extract_and_project(&p, BoundingBox::FLORIDA, NetworkType::Drive).unwrap();
        // 800 m at 25 mph ≈ 71.6 s
        let t = out.edges[0].travel_time.unwrap();
        assert!((t - 800.0 / (25.0 * 1.609_344 / 3.6)).abs() < 1e-9);
        // Untagged tertiary falls back to the class default (48 km/h).
        assert!((out.edges[2].travel_time.unwrap() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn partial_enrichment_does_not_abort() {
        let mut g = florida_graph();
        // An edge with an unknown class and no tag, in a graph where nothing
        // else is tagged either.
        g.retain_edges(|e| e.attrs.highway.as_deref() == Some("tertiary"));
        for a in g.edge_attrs_mut() {
            a.highway = Some("unknown_class".into());
        }
        let p = FixedProvider { graph: Some(g), enrich: true };
        let out = extract_and_project(&p, BoundingBox::FLORIDA, NetworkType::Drive).unwrap();
        assert_eq!(out.edge_count(), 2);
        assert_eq!(out.travel_time_gaps(), 2);
    }

    #[test]
    fn acquisition_error_propagates() {
        let p = FixedProvider { graph: None, enrich: true };
        let err = extract_and_project(&p, BoundingBox::FLORIDA, NetworkType::Drive).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Acquisition(NetworkError::EmptyRegion { network: NetworkType::Drive, .. })
        ));
    }

    #[test]
    fn persist_returns_sink_location() {
        let mut sink = CaptureSink::default();
        let out = rg_output::SerializedGraph::default();
        let loc = persist(&out, &mut sink, "x.json").unwrap();
        assert_eq!(loc, std::path::PathBuf::from("x.json"));
        assert_eq!(sink.written.len(), 1);
    }

    #[test]
    fn persistence_error_propagates() {
        let mut sink = CaptureSink { fail: true, ..Default::default() };
        let err = persist(&rg_output::SerializedGraph::default(), &mut sink, "x.json").unwrap_err();
        assert!(matches!(err, PipelineError::Persistence(_)));
    }
}

// ── End-to-end run ────────────────────────────────────────────────────────────

#[cfg(test)]
mod run {
    use rg_core::{Coordinate, CoreError};
    use rg_network::{MemoryProvider, NetworkType};
    use rg_output::JsonSink;
    use serde_json::Value;

    use super::helpers::{florida_graph, CaptureSink, FixedProvider};
    use crate::{run, PipelineConfig, PipelineError, Region};

    #[test]
    fn writes_json_with_expected_shape() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig {
            region: Region::Corners {
                a: Coordinate::new(31.0, -88.0),
                b: Coordinate::new(24.0, -77.0),
            },
            destination: Some("THEGRAPH.json".into()),
            ..Default::default()
        };
        let provider = MemoryProvider::new(florida_graph());
        let mut sink = JsonSink::new(dir.path()).unwrap();

        let path = run(&config, &provider, &mut sink).unwrap();
        assert_eq!(path, dir.path().join("THEGRAPH.json"));

        let v: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v.as_object().unwrap().len(), 2);
        assert_eq!(v["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(v["edges"].as_array().unwrap().len(), 4);
        assert_eq!(v["nodes"][0]["lat"], 27.3);
        assert_eq!(v["nodes"][0]["lon"], -80.5);
        assert!(v["edges"][0]["travel_time"].is_number());
    }

    #[test]
    fn nothing_written_when_acquisition_fails() {
        let config = PipelineConfig::default();
        let provider = FixedProvider { graph: None, enrich: false };
        let mut sink = CaptureSink::default();
        assert!(run(&config, &provider, &mut sink).is_err());
        assert!(sink.written.is_empty());
    }

    #[test]
    fn degenerate_box_passes_through_by_default() {
        let c = Coordinate::new(27.3, -80.5);
        let config = PipelineConfig {
            region: Region::Corners { a: c, b: c },
            ..Default::default()
        };
        // Node 1 sits exactly on the point; the zero-area box still reaches
        // the provider.
        let provider = MemoryProvider::new(florida_graph());
        let mut sink = CaptureSink::default();
        run(&config, &provider, &mut sink).unwrap();
        assert_eq!(sink.written[0].1.node_count(), 1);
        assert_eq!(sink.written[0].1.edge_count(), 0);
    }

    #[test]
    fn strict_mode_fails_fast() {
        let c = Coordinate::new(27.3, -80.5);
        let config = PipelineConfig {
            region: Region::Corners { a: c, b: c },
            strict: true,
            ..Default::default()
        };
        let provider = FixedProvider { graph: Some(florida_graph()), enrich: false };
        let mut sink = CaptureSink::default();
        let err = run(&config, &provider, &mut sink).unwrap_err();
        assert!(matches!(err, PipelineError::Input(CoreError::DegenerateBox(_))));
        assert!(sink.written.is_empty());
    }

    #[test]
    fn strict_mode_rejects_out_of_range() {
        let config = PipelineConfig {
            region: Region::Corners {
                a: Coordinate::new(91.0, 0.0),
                b: Coordinate::new(0.0, 1.0),
            },
            strict: true,
            network: NetworkType::Drive,
            ..Default::default()
        };
        let provider = FixedProvider { graph: Some(florida_graph()), enrich: false };
        let err = run(&config, &provider, &mut CaptureSink::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Input(CoreError::InvalidCoordinate(..))));
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::path::PathBuf;

    use rg_core::{BoundingBox, Coordinate};
    use rg_network::NetworkType;
    use rg_output::GraphSink;

    use crate::{OutputFormat, PipelineConfig, PipelineError, Region};

    #[test]
    fn empty_file_gives_florida_defaults() {
        let c = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(c, PipelineConfig::default());
        assert_eq!(c.bbox().unwrap(), BoundingBox::FLORIDA);
        assert_eq!(c.destination(), "graph.json");
        assert_eq!(c.network, NetworkType::Drive);
    }

    #[test]
    fn corners_region() {
        let c = PipelineConfig::from_toml_str(
            r#"
            destination = "THEGRAPH.json"
            format = "csv"
            network = "drive_service"
            pbf = "florida.osm.pbf"

            [region.corners]
            a = { lat = 31.0, lon = -88.0 }
            b = { lat = 24.0, lon = -77.0 }
            "#,
        )
        .unwrap();
        assert_eq!(
            c.region,
            Region::Corners { a: Coordinate::new(31.0, -88.0), b: Coordinate::new(24.0, -77.0) }
        );
        assert_eq!(c.bbox().unwrap().as_tuple(), (-88.0, 24.0, -77.0, 31.0));
        assert_eq!(c.format, OutputFormat::Csv);
        assert_eq!(c.destination(), "THEGRAPH.json");
        assert_eq!(c.network, NetworkType::DriveService);
        assert_eq!(c.pbf, Some(PathBuf::from("florida.osm.pbf")));
    }

    #[test]
    fn explicit_bbox_is_normalised() {
        let c = PipelineConfig::from_toml_str(
            r#"
            [region.bbox]
            west = -77.0
            south = 31.0
            east = -88.0
            north = 24.0
            "#,
        )
        .unwrap();
        assert_eq!(c.bbox().unwrap(), BoundingBox::FLORIDA);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = PipelineConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, PipelineError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PipelineConfig::from_toml_file(std::path::Path::new("/nonexistent/rg.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rg.toml"));
    }

    #[test]
    fn output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn default_destination_follows_format() {
        let json = PipelineConfig::default();
        assert_eq!(json.destination, None);
        assert_eq!(json.destination(), "graph.json");

        let csv = PipelineConfig::from_toml_str(r#"format = "csv""#).unwrap();
        assert_eq!(csv.destination(), "graph");
    }

    #[test]
    fn csv_default_writes_graph_directory() {
        let dir = tempfile::tempdir().unwrap();
        let c = PipelineConfig {
            output_dir: dir.path().to_path_buf(),
            format: OutputFormat::Csv,
            ..Default::default()
        };
        let provider = rg_network::MemoryProvider::new(super::helpers::florida_graph());
        let mut sink = c.sink().unwrap();
        let out = crate::run(&c, &provider, &mut sink).unwrap();
        assert_eq!(out, dir.path().join("graph"));
        assert!(out.join("nodes.csv").is_file());
        assert!(out.join("edges.csv").is_file());
        assert!(!dir.path().join("graph.json").exists());
    }

    #[test]
    fn sink_follows_format() {
        let dir = tempfile::tempdir().unwrap();
        let c = PipelineConfig {
            output_dir: dir.path().to_path_buf(),
            format: OutputFormat::Csv,
            destination: Some("g".into()),
            ..Default::default()
        };
        let mut sink = c.sink().unwrap();
        let out = sink.write(&rg_output::SerializedGraph::default(), c.destination()).unwrap();
        assert!(out.join("nodes.csv").exists());
    }
}
