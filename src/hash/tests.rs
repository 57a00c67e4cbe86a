use super::*;

#[test]
fn test_md5() {
    assert_eq!(md5_hex(""), "D41D8CD98F00B204E9800998ECF8427E");
    assert_eq!(md5_hex("abc"), "900150983CD24FB0D6963F7D28E17F72");
}

#[test]
fn test_sha1() {
    assert_eq!(sha1_hex("abc"), "A9993E364706816ABA3E25717850C26C9CD0D89D");
}

#[test]
fn test_sha256() {
    assert_eq!(
        sha256_hex("abc"),
        "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
    );
}

#[test]
fn test_sha384() {
    assert_eq!(
        sha384_hex("abc"),
        "CB00753F45A35E8BB5A03D699AC65007272C32AB0EDED1631A8B605A43FF5BED\
         8086072BA1E7CC2358BAECA134C825A7"
    );
}

#[test]
fn test_sha512() {
    assert_eq!(
        sha512_hex("abc"),
        "DDAF35A193617ABACC417349AE20413112E6FA4E89A97EA20A9EEEE64B55D39A\
         2192992A274FC1A836BA3C23A3FEEBBD454D4423643CE80E2A9AC94FA54CA49F"
    );
}

#[test]
fn test_distinct_inputs_differ() {
    assert_ne!(sha256_hex("abc"), sha256_hex("abd"));
    assert_eq!(sha256_hex("abc"), sha256_hex("abc"));
}
