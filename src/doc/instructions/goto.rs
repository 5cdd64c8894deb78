/*!
# `GOTO <target>`

## Purpose
Immediately and unconditionally continue at the target.

## Remarks
The target is a zero-based line number or a label name.

## Example
```text
GOTO SKIP
PRINT "THIS WILL NOT PRINT"
|SKIP|
PRINT "THIS WILL PRINT"
```
*/
