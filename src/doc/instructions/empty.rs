/*!
# `EMPTY`

## Purpose
Reserved. Does nothing.
*/
