//! Web server for browser-based sequence analysis.
//!
//! This module provides a small web interface using Axum. Users paste a
//! sequence (raw or FASTA), choose a frame and options, and see the
//! translation and motif hits.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! dna-motif-finder serve
//!
//! # Custom port and auto-open browser
//! dna-motif-finder serve --port 3000 --open
//!
//! # Bind to all interfaces
//! dna-motif-finder serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Main page with the analysis form
//! - `POST /api/analyze` - Analyze a sequence (JSON body)
//! - `GET /api/iupac` - List the IUPAC codes accepted in motifs
//! - `GET /api/health` - Liveness check

pub mod server;
