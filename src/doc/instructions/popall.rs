/*!
# `POPALL`, `POPALLLN`

## Purpose
Remove every value, printing them front to back.

## Remarks
`POPALL` prints them with nothing between. `POPALLLN` prints each on its
own line. An empty queue prints nothing.
*/
