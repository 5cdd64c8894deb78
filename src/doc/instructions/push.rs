/*!
# `PUSH <literal>`

## Purpose
Add a value to the back of the queue.

## Example
```text
PUSH 42
PUSH "forty two"
```
*/
