use std::fs;
use std::io::Read;

use serde::Serialize;

/// Read a whole file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        return Ok(body);
    }

    fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| format!("Failed to serialize: {}", e))
}
