//! Media I/O domain — temporary storage for media inputs and outputs.
//!
//! The platform hands out `crs://` object keys as shortcuts for a temporary
//! storage location valid for at least 24 hours. Uploads go to a pre-signed
//! URL obtained from `/media/input`; downloads stream from `/media/output`.

pub mod client;
