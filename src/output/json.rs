//
//  project-sdk
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Structured Output Module
//!
//! JSON and YAML serialization for machine-readable output. Both writers
//! end the document with a newline.

use std::io::Write;

use serde::Serialize;

pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_yaml_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(value)?;
    writer.write_all(yaml.as_bytes())?;
    if !yaml.ends_with('\n') {
        writeln!(writer)?;
    }
    Ok(())
}
