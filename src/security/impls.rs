pub mod secret_verifier;
