//! Sample evaluation command

use crate::EvalArgs;
use anyhow::Result;
use lumen_ops::remap_samples;
use tracing::trace;

pub fn run(args: EvalArgs) -> Result<()> {
    trace!(samples = args.samples.len(), max = ?args.max, "eval::run");

    let mapping = super::mapping_from_args(&args.mapping)?;
    let mapped = evaluate(&mapping, &args.samples, args.max)?;

    for (x, y) in args.samples.iter().zip(&mapped) {
        println!("{x} -> {y}");
    }
    Ok(())
}

/// Map samples, optionally pinning the log transform's image maximum
fn evaluate(mapping: &lumen_ops::Mapping, samples: &[u8], max: Option<u8>) -> Result<Vec<u8>> {
    match max {
        Some(max) => {
            mapping.validate()?;
            let table = mapping.transfer_table(max);
            Ok(samples.iter().map(|&s| table.get(s)).collect())
        }
        None => Ok(remap_samples(samples, mapping)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_ops::Mapping;

    #[test]
    fn test_log_uses_sample_max() {
        let out = evaluate(&Mapping::Logarithmic, &[0, 100], None).unwrap();
        assert_eq!(out, vec![0, 255]);
    }

    #[test]
    fn test_log_pinned_max() {
        let out = evaluate(&Mapping::Logarithmic, &[100], Some(255)).unwrap();
        assert!(out[0] < 255);
    }

    #[test]
    fn test_reference_curve() {
        let mapping = Mapping::piecewise(&[0, 70, 150, 255], &[0, 50, 200, 255]).unwrap();
        let out = evaluate(&mapping, &[70, 110, 255], None).unwrap();
        assert_eq!(out, vec![50, 125, 255]);
    }
}
