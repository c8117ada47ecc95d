use super::*;
use crate::detect::BrokenCallDetector;

fn default_detector() -> BrokenCallDetector {
    BrokenCallDetector::new("handleControllerError")
}

#[test]
fn matches_the_codemod_signature() {
    let d = default_detector();
    assert!(d.matches("    handleControllerError(error, res, ',"));
    assert!(d.matches("handleControllerError(error, res, ',"));
}

#[test]
fn tolerates_interior_whitespace() {
    let d = default_detector();
    assert!(d.matches("  handleControllerError( error , res , ',"));
    assert!(d.matches("  handleControllerError(error,res,',   "));
}

#[test]
fn rejects_completed_calls() {
    let d = default_detector();
    assert!(!d.matches("    handleControllerError(error, res, 'Controller.getItem');"));
    assert!(!d.matches("    handleControllerError(error, res, 'x');"));
}

#[test]
fn rejects_different_argument_heads() {
    let d = default_detector();
    assert!(!d.matches("    handleControllerError(err, res, ',"));
    assert!(!d.matches("    handleControllerError(error, response, ',"));
    assert!(!d.matches("    handleControllerError(error, ',"));
}

#[test]
fn rejects_trailing_content_after_the_stray_comma() {
    let d = default_detector();
    assert!(!d.matches("    handleControllerError(error, res, ', 'x');"));
    assert!(!d.matches("    handleControllerError(error, res, ',)"));
}

#[test]
fn rejects_unrelated_mentions_of_the_callee() {
    let d = default_detector();
    assert!(!d.matches("import { handleControllerError } from './errors';"));
    assert!(!d.matches("// handleControllerError is called below"));
    assert!(!d.matches(""));
}

#[test]
fn honors_a_custom_callee() {
    let d = BrokenCallDetector::new("reportFailure");
    assert!(d.matches("  reportFailure(error, res, ',"));
    assert!(!d.matches("  handleControllerError(error, res, ',"));
}
