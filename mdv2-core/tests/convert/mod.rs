mod basics;
mod code;
mod entities;
mod malformed;
mod properties;
