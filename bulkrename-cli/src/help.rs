/// Placeholder reference sheet printed by `bulkrename patterns`.
pub const PATTERNS: &str = "\
Special Patterns for Filename Template:

Date/Time Patterns (from each file's modification time):
  {YYYY}     - Year (e.g. 2024)
  {MM}       - Month (01-12)
  {DD}       - Day (01-31)
  {hh}       - Hour (00-23)
  {mm}       - Minute (00-59)
  {ss}       - Second (00-59)
  {date}     - Date in YYYY-MM-DD format
  {time}     - Time in HH-MM-SS format
  {datetime} - Full timestamp (YYYY-MM-DD_HH-MM-SS)

Special Value Patterns:
  {count}           - Incremental counter (1, 2, 3...)
  {count:3}         - Zero-padded counter (001, 002, 003...)
  {random}          - 5 random alphanumeric characters
  {random:10}       - 10 random alphanumeric characters
  {ext}             - Original file extension
  {origname}        - Original filename without extension

Example Pattern:
  photo_{date}_{count:3}.{ext}
  Result: photo_2024-01-01_001.jpg, photo_2024-01-01_002.png, etc.";

/// Usage examples printed by `bulkrename examples`.
pub const EXAMPLES: &str = "\
Usage Examples:

1. Rename all JPG files to a numbered sequence:
   bulkrename rename -p \"*.jpg\" -n \"photo_{count:3}.jpg\"

2. Add a date prefix to text files:
   bulkrename rename -p \"*.txt\" -n \"{date}_{origname}.{ext}\"

3. Replace spaces with underscores in all files:
   bulkrename rename -p \"*\" --find \" \" --replace \"_\"

4. Use a regex to strip numbers from filenames:
   bulkrename rename -p \"*\" --find \"[0-9]+\" --replace \"\" --regex

5. Recursively rename all PNG files in subfolders:
   bulkrename rename -p \"*.png\" -r -n \"image_{count:4}.png\"

6. Preview changes without renaming:
   bulkrename --preview rename -p \"*.jpg\" -n \"new_{origname}.jpg\"

7. Create a backup before renaming:
   bulkrename rename -f file1.txt file2.txt -n \"{datetime}_{origname}.{ext}\" --backup

8. Reverse the most recent rename batch:
   bulkrename rollback

9. View the rename history:
   bulkrename history

10. Case-insensitive find and replace:
   bulkrename rename -p \"*.txt\" --find \"test\" --replace \"sample\" -i";
