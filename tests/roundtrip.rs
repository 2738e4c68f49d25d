use cipherwheel::mono::{homophonic, keyphrase, pairing, reflection, rotation};
use cipherwheel::poly::{one_time_pad, running_key};
use cipherwheel::{alphabet, exchange, transposition, CipherError};
use num_bigint::BigUint;
use rand::rngs::OsRng;
use std::error::Error;

#[test]
fn book_vectors_survive_the_full_cycle() -> Result<(), Box<dyn Error>> {
    // Rail fence, from The Code Book's thy-secret example.
    let fenced = transposition::encrypt("THYSECRETISTHYPRISONERIFTHOULETITGOTHOUARTAPRISONERTOIT")?;
    assert_eq!(
        fenced,
        "TYERTSHPIOEITOLTTOHURARSNROTHSCEITYRSNRFHUEIGTOATPIOETI"
    );
    assert_eq!(
        transposition::decrypt(&fenced)?,
        "THYSECRETISTHYPRISONERIFTHOULETITGOTHOUARTAPRISONERTOIT"
    );

    // Caesar on the normalized veni-vidi-vici line.
    let caesar = rotation::caesar_encrypt(&alphabet::normalize("VENI, VIDI, VICI")?)?;
    assert_eq!(caesar, "YHQLYLGLYLFL");
    assert_eq!(rotation::caesar_decrypt(&caesar)?, "VENIVIDIVICI");

    // Keyphrase substitution.
    let phrase_ct = keyphrase::encrypt("ETTUBRUTE", "BEWAREIDES")?;
    assert_eq!(phrase_ct, "RKKLEHLKR");
    assert_eq!(keyphrase::decrypt(&phrase_ct, "BEWAREIDES")?, "ETTUBRUTE");

    // Running key with the emancipation keytext.
    let vigenere = running_key::encrypt(
        "THYSECRETISTHYPRISONERIFTHOULETITGOTHOUARTAPRISONERTOIT",
        "ANDYETEMANCIPATEDITMUSTBE",
    )?;
    assert_eq!(
        vigenere,
        "UVCRJWWRUWVCXZJWMBIAZKCHYICYKJNNGHCWQEVUWXJJEDLIPJSHSHY"
    );

    Ok(())
}

#[test]
fn generated_keys_decrypt_what_they_encrypted() -> Result<(), Box<dyn Error>> {
    let plaintext = "THEFAULTDEARBRUTUSISNOTINOURSTARS";

    let (paired_ct, pairing_key) = pairing::encrypt(plaintext, &mut OsRng)?;
    assert_eq!(pairing::decrypt(&paired_ct, &pairing_key)?, plaintext);

    let (homophonic_ct, homophonic_key) = homophonic::encrypt(plaintext, 9999, &mut OsRng)?;
    assert_eq!(homophonic::decrypt(&homophonic_ct, &homophonic_key)?, plaintext);

    let (otp_ct, pad) = one_time_pad::encrypt(plaintext, &mut OsRng)?;
    assert_eq!(pad.len(), plaintext.len());
    assert_eq!(one_time_pad::decrypt(&otp_ct, &pad)?, plaintext);

    Ok(())
}

#[test]
fn ciphers_compose_for_super_encipherment() -> Result<(), Box<dyn Error>> {
    // Substitute first, then transpose — undone in reverse order.
    let plaintext = "CROSSTHERUBICONATDAWN";
    let substituted = keyphrase::encrypt(plaintext, "ALEAIACTAEST")?;
    let transposed = transposition::encrypt(&substituted)?;

    let unfenced = transposition::decrypt(&transposed)?;
    assert_eq!(keyphrase::decrypt(&unfenced, "ALEAIACTAEST")?, plaintext);

    Ok(())
}

#[test]
fn reflection_needs_no_key_in_either_direction() -> Result<(), Box<dyn Error>> {
    let mirrored = reflection::transform("ATBASH")?;
    assert_eq!(reflection::transform(&mirrored)?, "ATBASH");
    Ok(())
}

#[test]
fn exchange_parties_derive_the_same_number() {
    let base = BigUint::from(7u32);
    let modulus = BigUint::from(2147483647u64); // 2^31 - 1

    let alice = exchange::initiate(&base, &modulus, &mut OsRng);
    let bob = exchange::initiate(&base, &modulus, &mut OsRng);

    assert_eq!(
        exchange::derive(&bob.shared, &alice.secret, &modulus),
        exchange::derive(&alice.shared, &bob.secret, &modulus)
    );
}

#[test]
fn wrong_or_missing_key_material_fails_loudly() {
    let (ciphertext, key) = homophonic::encrypt("ATTACKATDAWN", 9999, &mut OsRng).unwrap();

    // A token from outside the key's inverse table is rejected, not skipped.
    let forged = format!("{ciphertext} bogus");
    assert!(matches!(
        homophonic::decrypt(&forged, &key),
        Err(CipherError::UnknownToken(_))
    ));

    assert_eq!(
        one_time_pad::decrypt("XRAY", ""),
        Err(CipherError::MissingKey)
    );
    assert_eq!(
        pairing::decrypt("XRAY", &cipherwheel::SubstitutionKey::new()),
        Err(CipherError::MissingKey)
    );
}

#[test]
fn wrong_keyphrase_does_not_reproduce_the_plaintext() -> Result<(), Box<dyn Error>> {
    let ciphertext = keyphrase::encrypt("MEETMEATTHEFORUM", "BEWAREIDES")?;
    let garbled = keyphrase::decrypt(&ciphertext, "WRONGPHRASE")?;
    assert_ne!(garbled, "MEETMEATTHEFORUM");
    Ok(())
}
