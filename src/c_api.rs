// src/c_api.rs
//
// C ABI for embedding the phonetiser in TTS frontends. A single global
// engine lives behind a raw pointer; every entry point wraps its body in
// catch_unwind so a panic never crosses the FFI boundary.

use crate::core::engine::Phonetiser;
use crate::core::types::PhonetiserConfig;
use crate::persistence;
use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::ptr;

static mut PHONETISER: *mut Phonetiser = ptr::null_mut();

fn lexicon_path() -> Option<PathBuf> {
    let mut path = dirs::data_local_dir().or_else(dirs::home_dir)?;
    path.push("levantine-phonetiser");
    path.push("user_lexicon.bin");
    Some(path)
}

unsafe fn get_engine<'a>() -> Option<&'a Phonetiser> {
    PHONETISER.as_ref()
}

/// Build the global engine. `urban` and `simplify_feminine` are booleans
/// (0 = off). A lexicon snapshot saved by the console frontend is picked up
/// automatically when one exists.
#[no_mangle]
pub extern "C" fn levantine_phonetiser_init(urban: c_int, simplify_feminine: c_int) {
    let result = catch_unwind(|| unsafe {
        if !PHONETISER.is_null() {
            return;
        }
        let config = PhonetiserConfig {
            urban: urban != 0,
            simplify_feminine_endings: simplify_feminine != 0,
        };
        let lexicon = lexicon_path()
            .and_then(|path| persistence::load_lexicon(&path).ok())
            .unwrap_or_default();
        PHONETISER = Box::into_raw(Box::new(Phonetiser::with_lexicon(config, lexicon)));
        eprintln!("[Rust] Levantine phonetiser initialized.");
    });
    if result.is_err() {
        eprintln!("[Rust FATAL] A panic occurred during phonetiser initialization.");
        unsafe {
            PHONETISER = ptr::null_mut();
        }
    }
}

/// Free the global engine. Safe to call when init never ran.
#[no_mangle]
pub extern "C" fn levantine_phonetiser_destroy() {
    unsafe {
        if PHONETISER.is_null() {
            return;
        }
        drop(Box::from_raw(PHONETISER));
        PHONETISER = ptr::null_mut();
    }
}

/// All pronunciations of one word, as a JSON string array. The caller owns
/// the buffer and must release it with `levantine_phonetiser_free_string`.
#[no_mangle]
pub extern "C" fn levantine_phonetiser_phonemes(word: *const c_char) -> *mut c_char {
    if word.is_null() {
        return ptr::null_mut();
    }
    let arabic = unsafe { CStr::from_ptr(word) }.to_str().unwrap_or("");
    let result = catch_unwind(AssertUnwindSafe(|| {
        unsafe {
            if let Some(engine) = get_engine() {
                let pronunciations = engine.phonetise_word(arabic);
                return serde_json::to_string(&pronunciations).unwrap_or_else(|_| "[]".to_string());
            }
        }
        "[]".to_string()
    }));
    match result {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => {
            eprintln!("[Rust FATAL] Panic in levantine_phonetiser_phonemes.");
            ptr::null_mut()
        }
    }
}

/// The canonical phoneme line for a whole text, words joined by blanks.
#[no_mangle]
pub extern "C" fn levantine_phonetiser_primary(text: *const c_char) -> *mut c_char {
    if text.is_null() {
        return ptr::null_mut();
    }
    let arabic = unsafe { CStr::from_ptr(text) }.to_str().unwrap_or("");
    let result = catch_unwind(AssertUnwindSafe(|| {
        unsafe {
            if let Some(engine) = get_engine() {
                return engine.primary_phonemes(arabic);
            }
        }
        String::new()
    }));
    match result {
        Ok(line) => CString::new(line).unwrap_or_default().into_raw(),
        Err(_) => {
            eprintln!("[Rust FATAL] Panic in levantine_phonetiser_primary.");
            ptr::null_mut()
        }
    }
}

/// Release a string returned by this library.
#[no_mangle]
pub extern "C" fn levantine_phonetiser_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
